/// Genesis Chamber vocabulary tables
///
/// The catalog still carries the project's old working labels ("Fractal
/// Surrealism", "Nano Banana", ...). These tables map them to the public
/// Genesis Chamber vocabulary shown in the UI. Lookup is O(n) on a handful
/// of entries and runs once per vision when the gallery is built, not in a
/// hot loop.
///
/// A label missing from its table passes through unchanged. That fallback
/// is deliberate: a new epoch added to the catalog shows up under its raw
/// name instead of breaking the page.

/// Raw epoch label -> public display label
const EPOCHS: &[(&str, &str)] = &[
    ("Fractal Surrealism", "Fractal Surrealism Era"),
    ("Digital Mysticism", "Digital Mysticism Era"),
    ("Social Network Dreams", "Social Network Dreams Era"),
    ("AI Consciousness", "AI Consciousness Era"),
    ("Historical Masterworks", "Historical Visions"),
    ("Hypothetical Masterworks", "Hypothetical Visions"),
];

/// Raw interpreter (framework) label -> public display label
const INTERPRETERS: &[(&str, &str)] = &[
    ("Nano Banana", "Soul Vision"),
    ("Spectacular Framework", "Spectacular Consciousness"),
    ("Conceptual", "Conceptual Vision"),
];

fn lookup<'a>(table: &'static [(&'static str, &'static str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, display)| *display)
        .unwrap_or(raw)
}

/// Display label for a raw epoch name.
pub fn epoch_display(raw: &str) -> &str {
    lookup(EPOCHS, raw)
}

/// Display label for a raw interpreter (framework) name.
pub fn interpreter_display(raw: &str) -> &str {
    lookup(INTERPRETERS, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_epoch_key_maps() {
        assert_eq!(epoch_display("Fractal Surrealism"), "Fractal Surrealism Era");
        assert_eq!(epoch_display("Digital Mysticism"), "Digital Mysticism Era");
        assert_eq!(
            epoch_display("Social Network Dreams"),
            "Social Network Dreams Era"
        );
        assert_eq!(epoch_display("AI Consciousness"), "AI Consciousness Era");
        assert_eq!(epoch_display("Historical Masterworks"), "Historical Visions");
        assert_eq!(
            epoch_display("Hypothetical Masterworks"),
            "Hypothetical Visions"
        );
    }

    #[test]
    fn test_every_interpreter_key_maps() {
        assert_eq!(interpreter_display("Nano Banana"), "Soul Vision");
        assert_eq!(
            interpreter_display("Spectacular Framework"),
            "Spectacular Consciousness"
        );
        assert_eq!(interpreter_display("Conceptual"), "Conceptual Vision");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(epoch_display("Quantum Baroque"), "Quantum Baroque");
        assert_eq!(interpreter_display("Nano Banana Pro"), "Nano Banana Pro");
        assert_eq!(epoch_display(""), "");
    }

    #[test]
    fn test_tables_do_not_cross() {
        // An interpreter key looked up as an epoch falls through unchanged
        assert_eq!(epoch_display("Nano Banana"), "Nano Banana");
        assert_eq!(interpreter_display("AI Consciousness"), "AI Consciousness");
    }
}
