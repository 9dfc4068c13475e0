// Djinn family - saturated neon hues, two dark bases

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#28A9FF",
    green: "#42DD76",
    green_alt: "#b7d175",
    orange: "#FF7135",
    pink: "#E66DFF",
    purple: "#A95EFF",
    red: "#D62C2C",
    salmon: "#FF478D",
    turquoise: "#14E5D4",
    yellow: "#FFB638",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Djinn Ifrit", "djinn-ifrit", &SYNTAX, "#171131", "#A680FF")?,
        Palette::dark("Djinn Void", "djinn-void", &SYNTAX, "#141417", "#AAAAAA")?,
    ])
}
