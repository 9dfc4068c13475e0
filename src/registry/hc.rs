// High-contrast family - three dark palettes plus the light HC Ivory
//
// HC Ivory is the one exception in the registry: it uses the light-mode
// constructor but pins `text` to the literal value from the upstream Zed
// theme instead of the accent-derived formula.

use anyhow::Result;

use crate::palette::{Palette, SyntaxColors};

// Shared by Obsidian and Abyss (identical to the Sahara hues)
static DARK_SYNTAX: SyntaxColors = SyntaxColors {
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

static STORM_SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#82c4ff",
    green: "#9dffbd",
    green_alt: "#A4EF58",
    orange: "#ffaf94",
    pink: "#f1c6ee",
    purple: "#b8b3ff",
    red: "#ff7e70",
    salmon: "#f994bf",
    turquoise: "#22D3B1",
    yellow: "#fff0a6",
};

static IVORY_SYNTAX: SyntaxColors = SyntaxColors {
    blue: "#0aa3d6",
    green: "#41ad4e",
    green_alt: "#589f11",
    orange: "#e3946a",
    pink: "#f08ad9",
    purple: "#b377e3",
    red: "#ee5f50",
    salmon: "#ed7b89",
    turquoise: "#00b696",
    yellow: "#e39c03",
};

pub(super) fn palettes() -> Result<Vec<Palette>> {
    Ok(vec![
        Palette::dark_hc("HC Obsidian", "hc-obsidian", &DARK_SYNTAX, "#0e0e12", "#dbdeea")?,
        Palette::dark_hc("HC Storm", "hc-storm", &STORM_SYNTAX, "#0c2a42", "#9dffd9")?,
        Palette::dark_hc("HC Abyss", "hc-abyss", &DARK_SYNTAX, "#080810", "#f0f0ff")?,
        Palette::light_hc_with_text(
            "HC Ivory",
            "hc-ivory",
            &IVORY_SYNTAX,
            "#f5f8fc",
            "#444c54",
            "#272d34",
        )?,
    ])
}
