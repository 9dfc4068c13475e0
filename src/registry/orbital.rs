// Orbital family - muted Monokai-adjacent hues, three dark bases

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#78dce8",
    green: "#a9dc76",
    green_alt: "#b7d175",
    orange: "#fc9867",
    pink: "#e991e3",
    purple: "#ab9df2",
    red: "#fc6a67",
    salmon: "#ff6188",
    turquoise: "#78e8c6",
    yellow: "#ffd866",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Orbital Terra", "orbital-terra", &SYNTAX, "#262329", "#b0a2a6")?,
        Palette::dark("Orbital Steel", "orbital-steel", &SYNTAX, "#1e212b", "#98a2b5")?,
        Palette::dark("Orbital Stone", "orbital-stone", &SYNTAX, "#2A2D33", "#9AA2A6")?,
    ])
}
