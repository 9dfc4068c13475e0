// Color math helpers for palette derivation
//
// All adjustments happen in HSL space: lighten/darken move the lightness
// channel by a literal fraction, desaturate moves saturation, both clamped
// to [0, 1]. Output is always a normalized lowercase 6-digit hex string.

use anyhow::{bail, Context, Result};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL representation: h in degrees [0, 360), s and l in [0, 1].
#[derive(Debug, Clone, Copy)]
struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

/// Parse a `#rrggbb` hex string (leading `#` optional, case-insensitive).
pub fn parse_hex(value: &str) -> Result<Rgb> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("expected 6-digit hex color, got {value:?}");
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .with_context(|| format!("invalid hex color {value:?}"))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Format as a lowercase `#rrggbb` string.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Increase lightness by `amount` (fraction of the full channel).
pub fn lighten(hex: &str, amount: f64) -> Result<String> {
    adjust(hex, |hsl| hsl.l = (hsl.l + amount).clamp(0.0, 1.0))
}

/// Decrease lightness by `amount`.
pub fn darken(hex: &str, amount: f64) -> Result<String> {
    adjust(hex, |hsl| hsl.l = (hsl.l - amount).clamp(0.0, 1.0))
}

/// Decrease saturation by `amount`.
pub fn desaturate(hex: &str, amount: f64) -> Result<String> {
    adjust(hex, |hsl| hsl.s = (hsl.s - amount).clamp(0.0, 1.0))
}

/// HSL lightness of a hex color, in [0, 1].
#[allow(dead_code)] // Used by the surface-ordering invariant tests
pub fn lightness(hex: &str) -> Result<f64> {
    Ok(rgb_to_hsl(parse_hex(hex)?).l)
}

fn adjust(hex: &str, f: impl FnOnce(&mut Hsl)) -> Result<String> {
    let mut hsl = rgb_to_hsl(parse_hex(hex)?);
    f(&mut hsl);
    Ok(to_hex(hsl_to_rgb(hsl)))
}

fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        // Achromatic: hue is undefined, zero by convention
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = 60.0
        * if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

    Hsl { h, s, l }
}

fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let hp = hsl.h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = hsl.l - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(r1),
        g: channel(g1),
        b: channel(b1),
    }
}
