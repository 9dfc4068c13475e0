// Sahara family - warm pastel hues, two dark bases

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#7fd7f5",
    green: "#AFEA7B",
    green_alt: "#A4EF58",
    orange: "#ffaa7d",
    pink: "#e4a3df",
    purple: "#bc98ff",
    red: "#fd604f",
    salmon: "#EC7886",
    turquoise: "#22D3B1",
    yellow: "#F5DF76",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Sahara Onyx", "sahara-onyx", &SYNTAX, "#181820", "#dbdeea")?,
        Palette::dark("Sahara Cosmos", "sahara-cosmos", &SYNTAX, "#151f27", "#dbefff")?,
    ])
}
