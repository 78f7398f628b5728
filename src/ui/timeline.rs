/// Chamber timeline strip
/// Draws the distribution of visions per year across the collection's span
use iced::widget::canvas::{self, Stroke};
use iced::{Color, Point, Rectangle};

use crate::state::gallery::GalleryEntry;
use crate::Message;

/// Flame accent from the chamber palette (#F27123)
const FLAME: Color = Color::from_rgb(0.949, 0.443, 0.137);

/// Visions-per-year histogram data
#[derive(Debug, Clone)]
pub struct Timeline {
    /// One bin per year starting at first_year
    counts: Vec<u32>,
    first_year: i32,
}

impl Timeline {
    /// Bin a year-sorted gallery into per-year counts.
    pub fn from_entries(entries: &[GalleryEntry]) -> Self {
        // Entries are sorted by year, so the span is first..=last
        match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => {
                let first_year = first.vision.year;
                let span = (last.vision.year - first_year + 1).max(1) as usize;

                let mut counts = vec![0u32; span];
                for entry in entries {
                    counts[(entry.vision.year - first_year) as usize] += 1;
                }

                Timeline { counts, first_year }
            }
            _ => Timeline {
                counts: Vec::new(),
                first_year: 0,
            },
        }
    }

    /// First and last year covered, if the collection is non-empty.
    pub fn span(&self) -> Option<(i32, i32)> {
        if self.counts.is_empty() {
            None
        } else {
            Some((
                self.first_year,
                self.first_year + self.counts.len() as i32 - 1,
            ))
        }
    }
}

impl canvas::Program<Message> for Timeline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.counts.is_empty() {
            return vec![frame.into_geometry()];
        }

        // Normalize bar heights against the busiest year
        let max_count = self.counts.iter().copied().max().unwrap_or(1).max(1) as f32;

        let width = bounds.width;
        let height = bounds.height;
        let bar_width = width / self.counts.len() as f32;

        // Baseline along the bottom edge
        let mut baseline = canvas::path::Builder::new();
        baseline.move_to(Point::new(0.0, height - 1.0));
        baseline.line_to(Point::new(width, height - 1.0));
        frame.stroke(
            &baseline.build(),
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.25))
                .with_width(1.0),
        );

        // One bar per year with at least one vision
        let mut bars = canvas::path::Builder::new();
        for (i, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                let normalized = count as f32 / max_count;
                let bar_height = normalized * (height - 4.0);
                let x = i as f32 * bar_width + bar_width / 2.0;

                bars.move_to(Point::new(x, height - 1.0));
                bars.line_to(Point::new(x, height - 1.0 - bar_height));
            }
        }
        frame.stroke(
            &bars.build(),
            Stroke::default()
                .with_color(FLAME)
                .with_width((bar_width * 0.6).clamp(1.0, 6.0)),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Vision;

    fn entry(id: &str, year: i32) -> GalleryEntry {
        GalleryEntry {
            vision: Vision {
                id: id.to_string(),
                title: String::new(),
                year,
                price: String::new(),
                filename: String::new(),
                description_en: String::new(),
                description_de: String::new(),
            },
            epoch: String::new(),
            interpreter: String::new(),
        }
    }

    #[test]
    fn test_span_covers_first_to_last_year() {
        let timeline =
            Timeline::from_entries(&[entry("a", 1989), entry("b", 1989), entry("c", 2025)]);

        assert_eq!(timeline.span(), Some((1989, 2025)));
        assert_eq!(timeline.counts.len(), 37);
        assert_eq!(timeline.counts[0], 2);
        assert_eq!(timeline.counts[36], 1);
    }

    #[test]
    fn test_empty_gallery_has_no_span() {
        let timeline = Timeline::from_entries(&[]);

        assert_eq!(timeline.span(), None);
        assert!(timeline.counts.is_empty());
    }
}
