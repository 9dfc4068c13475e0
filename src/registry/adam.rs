// Adam family - Eva hues with a brighter green, six dark variants

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#4493c5",
    green: "#2ecc71",
    green_alt: "#8ab648",
    orange: "#e8641b",
    pink: "#d44a8a",
    purple: "#9b59b6",
    red: "#e01a1a",
    salmon: "#e84545",
    turquoise: "#2ba5a5",
    yellow: "#d4a017",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Adam", "adam", &SYNTAX, "#0a0a0a", "#2ecc71")?,
        Palette::dark("Adam Oasis", "adam-oasis", &SYNTAX, "#0a100f", "#1abc9c")?,
        Palette::dark("Adam Eden", "adam-eden", &SYNTAX, "#0f0e0a", "#d4b42a")?,
        Palette::dark("Adam Jade", "adam-jade", &SYNTAX, "#080d0b", "#27ae60")?,
        Palette::dark("Adam Soft", "adam-soft", &SYNTAX, "#121a14", "#2ecc71")?,
        Palette::dark("Adam Midnight", "adam-midnight", &SYNTAX, "#0a0a0a", "#58d68d")?,
    ])
}
