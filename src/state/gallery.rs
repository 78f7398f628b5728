/// Gallery view model
///
/// Turns the loaded catalog into what the timeline grid actually renders:
/// one flat list of visions, each annotated with its translated epoch and
/// interpreter labels, ordered by year. Pure functions over the catalog —
/// no IO, deterministic, recomputed once per load.

use std::collections::HashSet;

use super::data::{Catalog, Vision};
use super::vocabulary;

/// One vision as shown in the grid: the artwork record plus its two
/// translated display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub vision: Vision,
    /// Translated epoch label (e.g. "Fractal Surrealism Era")
    pub epoch: String,
    /// Translated interpreter label (e.g. "Soul Vision")
    pub interpreter: String,
}

/// Flatten the catalog into a year-ordered gallery.
///
/// Walks epochs in document order and visions in epoch order, then sorts
/// ascending by year. The sort is stable, so same-year visions keep their
/// document order. Every vision appears exactly once.
pub fn build_gallery(catalog: &Catalog) -> Vec<GalleryEntry> {
    let mut entries: Vec<GalleryEntry> = catalog
        .periods
        .iter()
        .flat_map(|epoch| {
            epoch.artworks.iter().map(|vision| GalleryEntry {
                vision: vision.clone(),
                epoch: vocabulary::epoch_display(&epoch.period).to_string(),
                interpreter: vocabulary::interpreter_display(&epoch.framework).to_string(),
            })
        })
        .collect();

    // Vec::sort_by_key is stable; ties keep document order
    entries.sort_by_key(|entry| entry.vision.year);

    entries
}

/// Headline numbers for the chamber hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionStats {
    /// Total visions across all epochs
    pub visions: usize,
    /// Number of epoch groups
    pub epochs: usize,
    /// Distinct soul interpreters
    pub interpreters: usize,
    /// Years spanned by the collection (latest year minus earliest; the
    /// collection starts in the year of death, so this reads as "years
    /// beyond death")
    pub years_beyond: i32,
}

/// Compute the hero-section statistics for a catalog.
///
/// An empty catalog yields all zeroes.
pub fn collection_stats(catalog: &Catalog) -> CollectionStats {
    let interpreters: HashSet<&str> = catalog
        .periods
        .iter()
        .map(|epoch| epoch.framework.as_str())
        .collect();

    let years: Vec<i32> = catalog
        .periods
        .iter()
        .flat_map(|epoch| epoch.artworks.iter().map(|vision| vision.year))
        .collect();

    let years_beyond = match (years.iter().min(), years.iter().max()) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    };

    CollectionStats {
        visions: catalog.vision_count(),
        epochs: catalog.periods.len(),
        interpreters: interpreters.len(),
        years_beyond,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Epoch;

    fn vision(id: &str, year: i32) -> Vision {
        Vision {
            id: id.to_string(),
            title: format!("Vision {}", id),
            year,
            price: "€1,000,000".to_string(),
            filename: format!("{}.jpg", id),
            description_en: String::new(),
            description_de: String::new(),
        }
    }

    fn epoch(period: &str, framework: &str, artworks: Vec<Vision>) -> Epoch {
        Epoch {
            period: period.to_string(),
            framework: framework.to_string(),
            artworks,
        }
    }

    #[test]
    fn test_every_vision_appears_exactly_once() {
        let catalog = Catalog {
            periods: vec![
                epoch(
                    "Fractal Surrealism",
                    "Nano Banana",
                    vec![vision("a", 1991), vision("b", 1989)],
                ),
                epoch("AI Consciousness", "Conceptual", vec![vision("c", 2024)]),
                epoch("Digital Mysticism", "Nano Banana", vec![]),
            ],
        };

        let entries = build_gallery(&catalog);

        assert_eq!(entries.len(), catalog.vision_count());
        let mut ids: Vec<&str> = entries.iter().map(|e| e.vision.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sorted_ascending_by_year() {
        let catalog = Catalog {
            periods: vec![epoch(
                "Fractal Surrealism",
                "Nano Banana",
                vec![vision("late", 1991), vision("early", 1989)],
            )],
        };

        let entries = build_gallery(&catalog);

        assert_eq!(entries[0].vision.id, "early");
        assert_eq!(entries[1].vision.id, "late");
        assert!(entries.windows(2).all(|w| w[0].vision.year <= w[1].vision.year));
    }

    #[test]
    fn test_same_year_keeps_document_order() {
        // a and b share a year but live in different epochs; a's epoch
        // comes first in the document, so a must come first in the gallery
        let catalog = Catalog {
            periods: vec![
                epoch("Fractal Surrealism", "Nano Banana", vec![vision("a", 2007)]),
                epoch(
                    "Digital Mysticism",
                    "Nano Banana",
                    vec![vision("b", 2007), vision("c", 1999)],
                ),
            ],
        };

        let entries = build_gallery(&catalog);

        assert_eq!(entries[0].vision.id, "c");
        assert_eq!(entries[1].vision.id, "a");
        assert_eq!(entries[2].vision.id, "b");
    }

    #[test]
    fn test_entries_carry_translated_labels() {
        let catalog = Catalog {
            periods: vec![
                epoch("Fractal Surrealism", "Nano Banana", vec![vision("a", 1989)]),
                epoch("Uncharted Epoch", "Nano Banana", vec![vision("b", 1995)]),
            ],
        };

        let entries = build_gallery(&catalog);

        assert_eq!(entries[0].epoch, "Fractal Surrealism Era");
        assert_eq!(entries[0].interpreter, "Soul Vision");
        // Unknown epoch label falls through untranslated
        assert_eq!(entries[1].epoch, "Uncharted Epoch");
    }

    #[test]
    fn test_collection_stats() {
        let catalog = Catalog {
            periods: vec![
                epoch(
                    "Fractal Surrealism",
                    "Nano Banana",
                    vec![vision("a", 1989), vision("b", 1991)],
                ),
                epoch(
                    "AI Consciousness",
                    "Spectacular Framework",
                    vec![vision("c", 2025)],
                ),
                epoch("Digital Mysticism", "Nano Banana", vec![vision("d", 2007)]),
            ],
        };

        let stats = collection_stats(&catalog);

        assert_eq!(stats.visions, 4);
        assert_eq!(stats.epochs, 3);
        assert_eq!(stats.interpreters, 2);
        assert_eq!(stats.years_beyond, 36);
    }

    #[test]
    fn test_empty_catalog_stats_are_zero() {
        let catalog = Catalog { periods: vec![] };

        assert_eq!(collection_stats(&catalog), CollectionStats::default());
        assert!(build_gallery(&catalog).is_empty());
    }
}
