//! Built-in named colour table.
//!
//! Populated once on first lookup and never mutated, so concurrent reads
//! need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Names in declaration order. Reverse lookup scans this slice so aliased
/// values (cyan/aqua, magenta/fuchsia, grey/gray) always resolve to the
/// first listed name.
const NAMED_COLOURS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("lime", (0, 255, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("aqua", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("silver", (192, 192, 192)),
    ("grey", (128, 128, 128)),
    ("gray", (128, 128, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("green", (0, 128, 0)),
    ("purple", (128, 0, 128)),
    ("teal", (0, 128, 128)),
    ("navy", (0, 0, 128)),
    ("orange", (255, 165, 0)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("gold", (255, 215, 0)),
    ("violet", (238, 130, 238)),
    ("indigo", (75, 0, 130)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("khaki", (240, 230, 140)),
    ("turquoise", (64, 224, 208)),
    ("crimson", (220, 20, 60)),
    ("lavender", (230, 230, 250)),
    ("beige", (245, 245, 220)),
    ("ivory", (255, 255, 240)),
    ("chocolate", (210, 105, 30)),
    ("tan", (210, 180, 140)),
    ("plum", (221, 160, 221)),
    ("orchid", (218, 112, 214)),
    ("skyblue", (135, 206, 235)),
    ("tomato", (255, 99, 71)),
    ("orangered", (255, 69, 0)),
    ("hotpink", (255, 105, 180)),
    ("slategrey", (112, 128, 144)),
];

static INDEX: OnceLock<HashMap<&'static str, (u8, u8, u8)>> = OnceLock::new();

/// Look up a colour name, case-insensitively.
pub fn lookup(name: &str) -> Option<(u8, u8, u8)> {
    let index = INDEX.get_or_init(|| NAMED_COLOURS.iter().copied().collect());
    index.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Find the name for an exact RGB value, if the table has one.
pub fn reverse_lookup(rgb: (u8, u8, u8)) -> Option<&'static str> {
    NAMED_COLOURS
        .iter()
        .find(|(_, value)| *value == rgb)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("red"), Some((255, 0, 0)));
        assert_eq!(lookup("RED"), Some((255, 0, 0)));
        assert_eq!(lookup("OrAnGe"), Some((255, 165, 0)));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("vermillion-ish"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(reverse_lookup((255, 0, 0)), Some("red"));
        assert_eq!(reverse_lookup((1, 2, 3)), None);
    }

    #[test]
    fn test_reverse_lookup_alias_order() {
        // cyan is declared before aqua, so the shared value maps to cyan.
        assert_eq!(reverse_lookup((0, 255, 255)), Some("cyan"));
        assert_eq!(reverse_lookup((128, 128, 128)), Some("grey"));
    }
}
