// Palette data model and derivation
//
// A palette is a named record: ten shared syntax hues, six derived surface
// shades, six derived text shades, an accent, and an appearance mode. The
// surface/text sets come from fixed-percentage HSL adjustments of one base
// color (see the constructors below); everything else is literal data.

use anyhow::Result;

use crate::color::{darken, desaturate, lighten};

/// Display-name prefix shared by every generated scheme.
pub const FAMILY: &str = "Nerv";

/// The ten syntax hue slots, shared by reference across a palette family.
#[derive(Debug)]
pub struct SyntaxColors {
    pub blue: &'static str,
    pub green: &'static str,
    /// Alternate green used by the upstream Zed palettes; carried in the
    /// tables but not referenced by either renderer.
    #[allow(dead_code)]
    pub green_alt: &'static str,
    pub orange: &'static str,
    pub pink: &'static str,
    pub purple: &'static str,
    pub red: &'static str,
    pub salmon: &'static str,
    pub turquoise: &'static str,
    pub yellow: &'static str,
}

/// The six background layers, darkest (crust) to most raised (surface2).
///
/// `base` passes through verbatim (original casing preserved); the other
/// five are derived and therefore normalized lowercase hex.
#[derive(Debug, Clone)]
pub struct SurfaceColors {
    pub crust: String,
    pub mantle: String,
    pub base: String,
    pub surface0: String,
    pub surface1: String,
    pub surface2: String,
}

impl SurfaceColors {
    /// Dark mode: crust/mantle sink below base, surfaces rise above it.
    pub fn dark(base: &str) -> Result<Self> {
        Ok(Self {
            crust: darken(base, 0.04)?,
            mantle: darken(base, 0.02)?,
            base: base.to_string(),
            surface0: lighten(base, 0.05)?,
            surface1: lighten(base, 0.10)?,
            surface2: lighten(base, 0.15)?,
        })
    }

    /// Light mode: everything darkens away from the near-white base.
    pub fn light(base: &str) -> Result<Self> {
        Ok(Self {
            crust: darken(base, 0.08)?,
            mantle: darken(base, 0.04)?,
            base: base.to_string(),
            surface0: darken(base, 0.10)?,
            surface1: darken(base, 0.15)?,
            surface2: darken(base, 0.20)?,
        })
    }
}

/// The six foreground shades, most muted (overlay0) to primary (text).
#[derive(Debug, Clone)]
pub struct TextColors {
    pub overlay0: String,
    pub overlay1: String,
    pub overlay2: String,
    pub subtext0: String,
    pub subtext1: String,
    pub text: String,
}

impl TextColors {
    pub fn dark(base: &str) -> Result<Self> {
        Ok(Self {
            overlay0: lighten(base, 0.25)?,
            overlay1: lighten(base, 0.35)?,
            overlay2: lighten(base, 0.45)?,
            subtext0: lighten(base, 0.55)?,
            subtext1: lighten(base, 0.60)?,
            text: desaturate(&lighten(base, 0.70)?, 0.01)?,
        })
    }

    /// Light mode derives `text` from the accent rather than the base, then
    /// desaturates it, to keep readable contrast on light backgrounds.
    pub fn light(base: &str, accent: &str) -> Result<Self> {
        Ok(Self {
            overlay0: darken(base, 0.25)?,
            overlay1: darken(base, 0.35)?,
            overlay2: darken(base, 0.45)?,
            subtext0: darken(base, 0.50)?,
            subtext1: darken(base, 0.55)?,
            text: desaturate(&darken(accent, 0.40)?, 0.3)?,
        })
    }
}

/// Appearance mode: selects derivation formulas and cursor/tab defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
    HighContrast,
}

impl Appearance {
    /// Label embedded in the composed display name.
    pub fn label(self) -> &'static str {
        match self {
            Appearance::Dark => "Dark",
            Appearance::Light => "Light",
            Appearance::HighContrast => "HC",
        }
    }
}

/// One complete named color theme.
#[derive(Debug)]
pub struct Palette {
    pub name: &'static str,
    /// Unique lowercase hyphenated slug; file-name suffix and plugin key.
    pub id: &'static str,
    pub appearance: Appearance,
    pub syntax: &'static SyntaxColors,
    pub surfaces: SurfaceColors,
    pub texts: TextColors,
    pub accent: &'static str,
}

impl Palette {
    pub fn dark(
        name: &'static str,
        id: &'static str,
        syntax: &'static SyntaxColors,
        base: &str,
        accent: &'static str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            id,
            appearance: Appearance::Dark,
            syntax,
            surfaces: SurfaceColors::dark(base)?,
            texts: TextColors::dark(base)?,
            accent,
        })
    }

    /// Dark derivation tagged high-contrast (same formulas, different label).
    pub fn dark_hc(
        name: &'static str,
        id: &'static str,
        syntax: &'static SyntaxColors,
        base: &str,
        accent: &'static str,
    ) -> Result<Self> {
        Ok(Self {
            appearance: Appearance::HighContrast,
            ..Self::dark(name, id, syntax, base, accent)?
        })
    }

    pub fn light(
        name: &'static str,
        id: &'static str,
        syntax: &'static SyntaxColors,
        base: &str,
        accent: &'static str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            id,
            appearance: Appearance::Light,
            syntax,
            surfaces: SurfaceColors::light(base)?,
            texts: TextColors::light(base, accent)?,
            accent,
        })
    }

    /// Light derivation tagged high-contrast, with `text` pinned to a
    /// literal value instead of the accent-derived formula. Exists for the
    /// one palette (HC Ivory) that must match the upstream Zed theme
    /// bit-for-bit.
    pub fn light_hc_with_text(
        name: &'static str,
        id: &'static str,
        syntax: &'static SyntaxColors,
        base: &str,
        accent: &'static str,
        text: &str,
    ) -> Result<Self> {
        let mut palette = Self::light(name, id, syntax, base, accent)?;
        palette.appearance = Appearance::HighContrast;
        palette.texts.text = text.to_string();
        Ok(palette)
    }

    /// Both renderers treat high-contrast as dark; only Light palettes get
    /// the light-mode slot substitutions. This includes the light-based
    /// HC Ivory, matching the reference generator.
    pub fn is_dark(&self) -> bool {
        self.appearance != Appearance::Light
    }

    /// Composed display name, e.g. `Nerv Dark - Qadr Fajr`. Embedded in the
    /// scheme metadata and used as the plugin's name-mapping value.
    pub fn display_name(&self) -> String {
        format!("{} {} - {}", FAMILY, self.appearance.label(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::lightness;

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

    fn l(hex: &str) -> f64 {
        lightness(hex).unwrap()
    }

    #[test]
    fn test_dark_surfaces_ordered_by_lightness() {
        let s = SurfaceColors::dark("#1c2433").unwrap();
        assert!(l(&s.crust) < l(&s.mantle));
        assert!(l(&s.mantle) < l(&s.base));
        assert!(l(&s.base) < l(&s.surface0));
        assert!(l(&s.surface0) < l(&s.surface1));
        assert!(l(&s.surface1) < l(&s.surface2));
    }

    #[test]
    fn test_light_surfaces_ordered_reversed() {
        let s = SurfaceColors::light("#f3f4f5").unwrap();
        assert!(l(&s.crust) > l(&s.surface0));
        assert!(l(&s.base) > l(&s.mantle));
        assert!(l(&s.mantle) > l(&s.crust));
        assert!(l(&s.surface0) > l(&s.surface1));
        assert!(l(&s.surface1) > l(&s.surface2));
    }

    #[test]
    fn test_base_passes_through_verbatim() {
        let s = SurfaceColors::dark("#222A38").unwrap();
        assert_eq!(s.base, "#222A38");
    }

    #[test]
    fn test_light_text_derives_from_accent() {
        let from_teal = TextColors::light("#f3f4f5", "#22a5c9").unwrap();
        let from_red = TextColors::light("#f3f4f5", "#d1174f").unwrap();
        // Same base, different accent: overlays match, text differs
        assert_eq!(from_teal.overlay0, from_red.overlay0);
        assert_ne!(from_teal.text, from_red.text);
    }

    #[test]
    fn test_display_name_composition() {
        let p = Palette::dark("Qadr Fajr", "qadr-fajr", &SYNTAX, "#1c2433", "#8196b5").unwrap();
        assert_eq!(p.display_name(), "Nerv Dark - Qadr Fajr");

        let hc = Palette::dark_hc("HC Obsidian", "hc-obsidian", &SYNTAX, "#0e0e12", "#dbdeea")
            .unwrap();
        assert_eq!(hc.display_name(), "Nerv HC - HC Obsidian");
    }

    #[test]
    fn test_high_contrast_counts_as_dark() {
        let hc = Palette::light_hc_with_text(
            "HC Ivory",
            "hc-ivory",
            &SYNTAX,
            "#f5f8fc",
            "#444c54",
            "#272d34",
        )
        .unwrap();
        assert!(hc.is_dark());
        assert_eq!(hc.texts.text, "#272d34");
        // The pinned text deviates from the generic light formula
        let generic = TextColors::light("#f5f8fc", "#444c54").unwrap();
        assert_ne!(hc.texts.text, generic.text);
        // But the rest of the set is the generic derivation
        assert_eq!(hc.texts.overlay0, generic.overlay0);
        assert_eq!(hc.texts.subtext1, generic.subtext1);
    }
}
