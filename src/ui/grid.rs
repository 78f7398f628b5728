/// Vision card grid
/// One card per gallery entry, wrapped to the window width
use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{button, column, image, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::catalog::loader;
use crate::state::gallery::GalleryEntry;
use crate::Message;

/// Card width in logical pixels, image is square at the same width
const CARD_WIDTH: f32 = 220.0;

/// Build the wrapped grid of vision cards.
///
/// Entries arrive already year-sorted; the grid keeps that order and wraps
/// rows to the available width. Clicking a card opens its detail overlay.
pub fn gallery_grid<'a>(
    entries: &'a [GalleryEntry],
    thumbnails: &HashMap<String, PathBuf>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| vision_card(entry, thumbnails.get(&entry.vision.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn vision_card<'a>(
    entry: &'a GalleryEntry,
    thumbnail: Option<&PathBuf>,
) -> Element<'a, Message> {
    // Cached thumbnail when the batch has produced one, full image otherwise
    let handle = match thumbnail {
        Some(path) => image::Handle::from_path(path),
        None => image::Handle::from_path(loader::artwork_image_path(&entry.vision.filename)),
    };

    let card = column![
        image(handle)
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(CARD_WIDTH)),
        text(entry.vision.year.to_string()).size(13),
        text(&entry.vision.title).size(16),
        text(&entry.epoch).size(12),
        text(&entry.vision.price).size(12),
    ]
    .spacing(4)
    .width(Length::Fixed(CARD_WIDTH));

    button(card)
        .on_press(Message::VisionSelected(entry.vision.id.clone()))
        .style(button::text)
        .padding(8)
        .into()
}
