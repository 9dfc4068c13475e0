// Magi family - desaturated teal-leaning hues, three dark bases

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#3a7a8c",
    green: "#4a8c5c",
    green_alt: "#6aac7c",
    orange: "#e85d04",
    pink: "#8a5a8a",
    purple: "#7a6aaa",
    red: "#c44a3a",
    salmon: "#d46a5a",
    turquoise: "#5a9a8c",
    yellow: "#d4a017",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Magi Melchior", "magi-melchior", &SYNTAX, "#0a1612", "#e85d04")?,
        Palette::dark("Magi Balthasar", "magi-balthasar", &SYNTAX, "#0a1216", "#3a7a8c")?,
        Palette::dark("Magi Casper", "magi-casper", &SYNTAX, "#0f1610", "#d4a017")?,
    ])
}
