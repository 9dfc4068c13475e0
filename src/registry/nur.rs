// Nūr family - the six light palettes; the sorbet variants share a second,
// slightly muted syntax table

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static BASE_SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#0073d1",
    green: "#189433",
    green_alt: "#5e8516",
    orange: "#d06200",
    pink: "#e022b4",
    purple: "#8737e6",
    red: "#d03333",
    salmon: "#e8386a",
    turquoise: "#009999",
    yellow: "#bb9600",
};

static SORBET_SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#0076c5",
    green: "#008b17",
    green_alt: "#668b07",
    orange: "#b96000",
    pink: "#c121a4",
    purple: "#7522d3",
    red: "#d12525",
    salmon: "#da2a5f",
    turquoise: "#008f8f",
    yellow: "#c08403",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::light("Nūr", "nur", &BASE_SYNTAX, "#f3f4f5", "#22a5c9")?,
        Palette::light("Nūr Cherry", "nur-cherry", &SORBET_SYNTAX, "#f1e8eb", "#d1174f")?,
        Palette::light("Nūr Mint", "nur-mint", &SORBET_SYNTAX, "#edf3ee", "#2a9b7d")?,
        Palette::light("Nūr Grape", "nur-grape", &SORBET_SYNTAX, "#dad9eb", "#422eb0")?,
        Palette::light("Nūr Peach", "nur-peach", &SORBET_SYNTAX, "#f5ece6", "#d4652a")?,
        Palette::light("Nūr Lavender", "nur-lavender", &SORBET_SYNTAX, "#eee8f3", "#7b4fbf")?,
    ])
}
