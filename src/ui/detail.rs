/// Vision detail overlay
///
/// Shown above the grid when a card is clicked. The card swallows clicks;
/// the scrim around it and the close control both dismiss the overlay.
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::catalog::loader;
use crate::state::data::Language;
use crate::state::gallery::GalleryEntry;
use crate::Message;

/// Build the overlay layer for a selected vision.
///
/// The caller stacks this on top of the gallery page. Descriptions follow
/// the selected language; every other field is language-invariant.
pub fn overlay(entry: &GalleryEntry, language: Language) -> Element<'_, Message> {
    let handle = image::Handle::from_path(loader::artwork_image_path(&entry.vision.filename));

    let title_bar = row![
        text(&entry.vision.title).size(26).width(Length::Fill),
        button(text("✕").size(18))
            .on_press(Message::CloseDetail)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let meta = row![
        text(&entry.epoch).size(13),
        text("·").size(13),
        text(&entry.interpreter).size(13),
        text("·").size(13),
        text(entry.vision.year.to_string()).size(13),
    ]
    .spacing(8);

    let value = row![
        text("Estimated Value:").size(14),
        text(&entry.vision.price).size(14),
    ]
    .spacing(8);

    let card = container(
        column![
            title_bar,
            image(handle).width(Length::Fixed(420.0)),
            meta,
            text(entry.vision.description(language)).size(14),
            value,
        ]
        .spacing(14)
        .max_width(480.0),
    )
    .padding(24)
    .style(container::rounded_box);

    // Clicks on the scrim close the overlay; the opaque card keeps its own
    opaque(
        mouse_area(center(opaque(card)).style(scrim)).on_press(Message::CloseDetail),
    )
}

fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
