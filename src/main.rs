use iced::widget::{
    button, canvas, center, column, container, horizontal_space, row, scrollable, stack, text,
};
use iced::{Alignment, Element, Length, Task, Theme};
use std::collections::HashMap;
use std::path::PathBuf;

// Declare the application modules
mod catalog;
mod state;
mod ui;

use catalog::loader::{self, CatalogError};
use catalog::thumbnail::{self, ThumbnailBatch};
use state::data::{Catalog, Language};
use state::gallery::{self, CollectionStats, GalleryEntry};
use ui::timeline::Timeline;

/// Main application state
struct SoulChamber {
    /// Where this session is in its load lifecycle
    phase: Phase,
    /// Which description language is displayed
    language: Language,
    /// Status message to display to the user
    status: String,
}

/// Lifecycle of one page view
///
/// Loading becomes Ready when the one catalog fetch resolves, or Failed
/// forever if it doesn't. There is no retry; a failed session stays failed
/// until the viewer is restarted.
enum Phase {
    Loading,
    Failed(CatalogError),
    Ready(Gallery),
}

/// Everything the ready page renders
struct Gallery {
    /// The loaded catalog, kept for the session
    catalog: Catalog,
    /// Flattened, year-ordered visions with translated labels
    entries: Vec<GalleryEntry>,
    /// Hero-section numbers
    stats: CollectionStats,
    /// Visions-per-year strip
    timeline: Timeline,
    /// Vision id -> cached thumbnail path, filled in by the background batch
    thumbnails: HashMap<String, PathBuf>,
    /// Vision id whose detail overlay is open
    selected: Option<String>,
}

impl Gallery {
    fn selected_entry(&self) -> Option<&GalleryEntry> {
        let id = self.selected.as_deref()?;
        self.entries.iter().find(|entry| entry.vision.id == id)
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The one catalog load resolved
    CatalogLoaded(Result<Catalog, CatalogError>),
    /// Background thumbnail batch completed
    ThumbnailsReady(ThumbnailBatch),
    /// User clicked a vision card
    VisionSelected(String),
    /// User dismissed the detail overlay
    CloseDetail,
    /// User picked a display language
    LanguageSelected(Language),
}

impl SoulChamber {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!(
            "🎨 Genesis Chamber starting, catalog at {}",
            loader::CATALOG_PATH
        );

        (
            SoulChamber {
                phase: Phase::Loading,
                language: Language::En,
                status: String::from("Awakening digital consciousness..."),
            },
            // The single catalog fetch of this session
            Task::perform(
                loader::load_catalog(PathBuf::from(loader::CATALOG_PATH)),
                Message::CatalogLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                let entries = gallery::build_gallery(&catalog);
                let stats = gallery::collection_stats(&catalog);
                let timeline = Timeline::from_entries(&entries);

                self.status = format!(
                    "Ready. {} visions across {} epochs.",
                    stats.visions, stats.epochs
                );

                // Hand the artwork locations to the thumbnail batch
                let artworks: Vec<(String, PathBuf)> = entries
                    .iter()
                    .map(|entry| {
                        (
                            entry.vision.id.clone(),
                            loader::artwork_image_path(&entry.vision.filename),
                        )
                    })
                    .collect();

                self.phase = Phase::Ready(Gallery {
                    catalog,
                    entries,
                    stats,
                    timeline,
                    thumbnails: HashMap::new(),
                    selected: None,
                });

                Task::perform(
                    thumbnail::prepare_thumbnails(artworks),
                    Message::ThumbnailsReady,
                )
            }
            Message::CatalogLoaded(Err(error)) => {
                eprintln!("❌ Catalog load failed: {}", error);

                self.status = String::from("The chamber could not be opened.");
                self.phase = Phase::Failed(error);

                Task::none()
            }
            Message::ThumbnailsReady(batch) => {
                self.status = format!(
                    "✅ Thumbnails ready: {} generated, {} reused.",
                    batch.generated, batch.reused
                );

                if let Phase::Ready(gallery) = &mut self.phase {
                    gallery.thumbnails.extend(batch.thumbnails);
                }

                Task::none()
            }
            Message::VisionSelected(id) => {
                if let Phase::Ready(gallery) = &mut self.phase {
                    gallery.selected = Some(id);
                }

                Task::none()
            }
            Message::CloseDetail => {
                if let Phase::Ready(gallery) = &mut self.phase {
                    gallery.selected = None;
                }

                Task::none()
            }
            Message::LanguageSelected(language) => {
                // Only switches which description field is shown; nothing
                // reloads and labels stay as they are
                self.language = language;

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.phase {
            Phase::Loading => self.loading_view(),
            Phase::Failed(error) => self.failed_view(error),
            Phase::Ready(gallery) => self.chamber_view(gallery),
        }
    }

    fn loading_view(&self) -> Element<Message> {
        let content = column![
            text("THE SOUL CHAMBER").size(40),
            text("Loading Soul Chamber...").size(18),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        center(content).into()
    }

    fn failed_view<'a>(&'a self, error: &'a CatalogError) -> Element<'a, Message> {
        let content = column![
            text("THE CHAMBER IS SEALED").size(40),
            text("The artwork catalog could not be loaded.").size(18),
            text(error.to_string()).size(14).style(text::danger),
            text("Restart the viewer to try again.").size(14),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        center(content).into()
    }

    fn chamber_view<'a>(&'a self, gallery: &'a Gallery) -> Element<'a, Message> {
        let header = row![
            text("THE SOUL CHAMBER").size(32),
            horizontal_space(),
            language_toggle(self.language),
        ]
        .align_y(Alignment::Center)
        .spacing(16);

        let subtitle = text(format!(
            "{} Visions Across {} Epochs",
            gallery.catalog.vision_count(),
            gallery.catalog.periods.len()
        ))
        .size(16);

        let stats = row![
            stat(gallery.stats.visions.to_string(), "Visions"),
            stat(gallery.stats.epochs.to_string(), "Epochs"),
            stat(gallery.stats.years_beyond.to_string(), "Years Beyond Death"),
            stat(gallery.stats.interpreters.to_string(), "Soul Interpreters"),
        ]
        .spacing(48);

        let timeline_strip = column![
            canvas(&gallery.timeline)
                .width(Length::Fill)
                .height(Length::Fixed(64.0)),
            timeline_caption(&gallery.timeline),
        ]
        .spacing(4);

        let content = column![
            subtitle,
            stats,
            timeline_strip,
            ui::grid::gallery_grid(&gallery.entries, &gallery.thumbnails),
        ]
        .spacing(28)
        .padding(24);

        let page: Element<Message> = column![
            header,
            scrollable(content).height(Length::Fill),
            text(&self.status).size(13),
        ]
        .spacing(12)
        .padding(16)
        .into();

        // Detail overlay sits above the page when a vision is selected
        match gallery.selected_entry() {
            Some(entry) => stack![page, ui::detail::overlay(entry, self.language)].into(),
            None => page,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// One hero-section statistic
fn stat<'a>(number: String, label: &'a str) -> Element<'a, Message> {
    column![text(number).size(36), text(label).size(12)]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
}

/// EN/DE toggle; the active language's button is disabled
fn language_toggle(current: Language) -> Element<'static, Message> {
    let mut buttons = row![].spacing(4);

    for &language in Language::all() {
        buttons = buttons.push(
            button(text(language.label()).size(14))
                .on_press_maybe(
                    (language != current).then_some(Message::LanguageSelected(language)),
                )
                .padding(6),
        );
    }

    buttons.into()
}

/// Year range under the timeline strip
fn timeline_caption(timeline: &Timeline) -> Element<'_, Message> {
    match timeline.span() {
        Some((first, last)) => row![
            text(first.to_string()).size(12),
            horizontal_space(),
            text(last.to_string()).size(12),
        ]
        .into(),
        None => container(text("")).into(),
    }
}

fn main() -> iced::Result {
    iced::application("Genesis Chamber", SoulChamber::update, SoulChamber::view)
        .theme(SoulChamber::theme)
        .centered()
        .run_with(SoulChamber::new)
}
