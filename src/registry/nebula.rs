// Nebula family - one shared near-black base, five accent variants

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#11B7D4",
    green: "#00a884",
    green_alt: "#3585bb",
    orange: "#d4770c",
    pink: "#d46ec0",
    purple: "#a85ff1",
    red: "#E35535",
    salmon: "#c62f52",
    turquoise: "#38c7bd",
    yellow: "#c7910c",
};

const BASE: &str = "#111418";

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark("Nebula Sapphire", "nebula-sapphire", &SYNTAX, BASE, "#11B7D4")?,
        Palette::dark("Nebula Amber", "nebula-amber", &SYNTAX, BASE, "#c7910c")?,
        Palette::dark("Nebula Crimson", "nebula-crimson", &SYNTAX, BASE, "#c62f52")?,
        Palette::dark("Nebula Jade", "nebula-jade", &SYNTAX, BASE, "#38c7bd")?,
        Palette::dark("Nebula Violet", "nebula-violet", &SYNTAX, BASE, "#a85ff1")?,
    ])
}
