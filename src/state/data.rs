/// Shared data structures for the application state
///
/// These structs mirror the catalog document at assets/artworks.json and
/// flow unchanged from the loader to the UI layer. The catalog is read once
/// per session and never written back.

use serde::{Deserialize, Serialize};

/// A single artwork in the collection
///
/// One entry of an epoch's `artworks` array. Descriptions exist in both
/// supported languages; everything else is language-invariant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vision {
    /// Unique identifier (e.g. "wall-of-memory")
    pub id: String,
    /// Display title
    pub title: String,
    /// Year the vision is dated to
    pub year: i32,
    /// Estimated value, already formatted for display (e.g. "€2,400,000")
    pub price: String,
    /// Image filename under assets/artworks/ (never validated here)
    pub filename: String,
    /// Free-text description, English
    pub description_en: String,
    /// Free-text description, German
    pub description_de: String,
}

impl Vision {
    /// The description in the currently selected display language.
    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::En => &self.description_en,
            Language::De => &self.description_de,
        }
    }
}

/// A named historical grouping of visions
///
/// `period` and `framework` are raw catalog strings; the vocabulary tables
/// turn them into display labels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Epoch {
    /// Raw epoch label (e.g. "Fractal Surrealism")
    pub period: String,
    /// Raw interpreter label (e.g. "Nano Banana")
    pub framework: String,
    /// Visions belonging to this epoch, in document order
    pub artworks: Vec<Vision>,
}

/// The root catalog document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Epoch groups in document order
    pub periods: Vec<Epoch>,
}

impl Catalog {
    /// Parse a catalog from its JSON source text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of visions across all epochs.
    pub fn vision_count(&self) -> usize {
        self.periods.iter().map(|epoch| epoch.artworks.len()).sum()
    }
}

/// Display language for free-text descriptions
///
/// A two-valued toggle. Switching language never reloads the catalog and
/// never re-translates the epoch/interpreter labels; only the description
/// field shown for each vision changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
}

impl Language {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Short label for the header toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::De => "DE",
        }
    }

    /// Both supported languages, in display order.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::De]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "periods": [
            {
                "period": "Fractal Surrealism",
                "framework": "Nano Banana",
                "artworks": [
                    {
                        "id": "wall-of-memory",
                        "title": "The Wall of Memory Dissolves",
                        "year": 1989,
                        "price": "€2,400,000",
                        "filename": "wall_of_memory.jpg",
                        "description_en": "The Berlin Wall melts into clocks.",
                        "description_de": "Die Berliner Mauer zerfließt zu Uhren."
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();

        assert_eq!(catalog.periods.len(), 1);
        assert_eq!(catalog.vision_count(), 1);

        let epoch = &catalog.periods[0];
        assert_eq!(epoch.period, "Fractal Surrealism");
        assert_eq!(epoch.framework, "Nano Banana");
        assert_eq!(epoch.artworks[0].year, 1989);
    }

    #[test]
    fn test_description_follows_language() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let vision = &catalog.periods[0].artworks[0];

        assert!(vision.description(Language::En).contains("Berlin Wall"));
        assert!(vision.description(Language::De).contains("Berliner Mauer"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::De.code(), "de");
        assert_eq!(Language::all().len(), 2);
    }
}
