// Eva family - six dark variants tinted toward each unit's accent

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

static SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#4493c5",
    green: "#5fa052",
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
        Palette::dark("Eva", "eva", &SYNTAX, "#0a0a0a", "#e01a1a")?,
        Palette::dark("Eva Unit-01", "eva-unit-01", &SYNTAX, "#0d0a14", "#9b59b6")?,
        Palette::dark("Eva Unit-02", "eva-unit-02", &SYNTAX, "#140a0a", "#e8641b")?,
        Palette::dark("Eva Terminal", "eva-terminal", &SYNTAX, "#0a0f0a", "#5fa052")?,
        Palette::dark("Eva Geofront", "eva-geofront", &SYNTAX, "#0a0a10", "#4493c5")?,
        Palette::dark("Eva Soft", "eva-soft", &SYNTAX, "#1a1214", "#e01a1a")?,
    ])
}
