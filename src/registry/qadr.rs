// Qadr family - three dark variants over blue-slate bases

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#69C3FF",
    green: "#3CEC85",
    green_alt: "#A4EF58",
    orange: "#FF955C",
    pink: "#F38CEC",
    purple: "#B78AFF",
    red: "#E35535",
    salmon: "#FF738A",
    turquoise: "#22ECDB",
    yellow: "#EACD61",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Qadr Fajr", "qadr-fajr", &SYNTAX, "#1c2433", "#8196b5")?,
        Palette::dark("Qadr Layl", "qadr-layl", &SYNTAX, "#222A38", "#9DACC3")?,
        Palette::dark("Qadr Najm", "qadr-najm", &SYNTAX, "#111422", "#8eb0e6")?,
    ])
}
