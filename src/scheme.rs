// WezTerm TOML color-scheme renderer
//
// Pure function from one palette to the scheme file text. WezTerm scheme
// files use single-quoted literal strings, so the text is templated rather
// than serialized; the tests parse it back through the `toml` crate to keep
// the output honest.
//
// Slot substitutions for ansi/brights 0 and 7, cursor_fg, and the active
// tab foreground flip between the surface and text sets depending on
// dark/light mode. Tab styling fields are fixed literals for every state.

use crate::palette::Palette;

pub fn render(p: &Palette) -> String {
    let syn = p.syntax;
    let s = &p.surfaces;
    let t = &p.texts;
    let is_dark = p.is_dark();

    let ansi0 = if is_dark { &s.surface1 } else { &t.subtext1 };
    let ansi7 = if is_dark { &t.subtext1 } else { &s.surface2 };
    let bright0 = if is_dark { &s.surface2 } else { &t.subtext0 };
    let bright7 = if is_dark { &t.subtext0 } else { &s.surface1 };
    let cursor_fg = if is_dark { &s.crust } else { &s.base };
    let active_tab_fg = if is_dark { s.crust.as_str() } else { "#ffffff" };

    format!(
        r"[colors]
ansi = [
  '{ansi0}',
  '{red}',
  '{green}',
  '{yellow}',
  '{blue}',
  '{pink}',
  '{turquoise}',
  '{ansi7}',
]
background = '{base}'
brights = [
  '{bright0}',
  '{red}',
  '{green}',
  '{yellow}',
  '{blue}',
  '{pink}',
  '{turquoise}',
  '{bright7}',
]
compose_cursor = '{orange}'
cursor_bg = '{salmon}'
cursor_border = '{salmon}'
cursor_fg = '{cursor_fg}'
foreground = '{text}'
scrollbar_thumb = '{surface2}'
selection_bg = '{surface2}'
selection_fg = '{text}'
split = '{overlay0}'
visual_bell = '{surface0}'

[colors.indexed]
16 = '{orange}'
17 = '{salmon}'

[colors.tab_bar]
background = '{crust}'
inactive_tab_edge = '{surface0}'

[colors.tab_bar.active_tab]
bg_color = '{accent}'
fg_color = '{active_tab_fg}'
intensity = 'Normal'
italic = false
strikethrough = false
underline = 'None'

[colors.tab_bar.inactive_tab]
bg_color = '{mantle}'
fg_color = '{text}'
intensity = 'Normal'
italic = false
strikethrough = false
underline = 'None'

[colors.tab_bar.inactive_tab_hover]
bg_color = '{base}'
fg_color = '{text}'
intensity = 'Normal'
italic = false
strikethrough = false
underline = 'None'

[colors.tab_bar.new_tab]
bg_color = '{surface0}'
fg_color = '{text}'
intensity = 'Normal'
italic = false
strikethrough = false
underline = 'None'

[colors.tab_bar.new_tab_hover]
bg_color = '{surface1}'
fg_color = '{text}'
intensity = 'Normal'
italic = false
strikethrough = false
underline = 'None'

[metadata]
aliases = []
author = 'meastblue'
name = '{name}'
",
        ansi0 = ansi0,
        ansi7 = ansi7,
        bright0 = bright0,
        bright7 = bright7,
        cursor_fg = cursor_fg,
        active_tab_fg = active_tab_fg,
        red = syn.red,
        green = syn.green,
        yellow = syn.yellow,
        blue = syn.blue,
        pink = syn.pink,
        turquoise = syn.turquoise,
        orange = syn.orange,
        salmon = syn.salmon,
        base = s.base,
        crust = s.crust,
        mantle = s.mantle,
        surface0 = s.surface0,
        surface1 = s.surface1,
        surface2 = s.surface2,
        overlay0 = t.overlay0,
        text = t.text,
        accent = p.accent,
        name = p.display_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;
    use crate::registry;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Deserialize)]
    struct SchemeDoc {
        colors: Colors,
        metadata: Metadata,
    }

    #[derive(Deserialize)]
    struct Colors {
        ansi: Vec<String>,
        background: String,
        brights: Vec<String>,
        compose_cursor: String,
        cursor_bg: String,
        cursor_border: String,
        cursor_fg: String,
        foreground: String,
        scrollbar_thumb: String,
        selection_bg: String,
        selection_fg: String,
        split: String,
        visual_bell: String,
        indexed: BTreeMap<String, String>,
        tab_bar: TabBar,
    }

    #[derive(Deserialize)]
    struct TabBar {
        background: String,
        inactive_tab_edge: String,
        active_tab: TabState,
        inactive_tab: TabState,
        inactive_tab_hover: TabState,
        new_tab: TabState,
        new_tab_hover: TabState,
    }

    #[derive(Deserialize)]
    struct TabState {
        bg_color: String,
        fg_color: String,
        intensity: String,
        italic: bool,
        strikethrough: bool,
        underline: String,
    }

    #[derive(Deserialize)]
    struct Metadata {
        aliases: Vec<String>,
        author: String,
        name: String,
    }

    fn find(id: &str) -> crate::palette::Palette {
        registry::palettes()
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_render_is_deterministic() {
        for p in registry::palettes().unwrap() {
            assert_eq!(render(&p), render(&p), "{}", p.id);
        }
    }

    #[test]
    fn test_every_scheme_is_valid_toml_with_valid_colors() {
        for p in registry::palettes().unwrap() {
            let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
            assert_eq!(doc.colors.ansi.len(), 8, "{}", p.id);
            assert_eq!(doc.colors.brights.len(), 8, "{}", p.id);
            for hex in doc.colors.ansi.iter().chain(&doc.colors.brights) {
                assert!(parse_hex(hex).is_ok(), "{}: {hex:?}", p.id);
            }
            for hex in [
                &doc.colors.background,
                &doc.colors.compose_cursor,
                &doc.colors.cursor_bg,
                &doc.colors.cursor_border,
                &doc.colors.cursor_fg,
                &doc.colors.foreground,
                &doc.colors.scrollbar_thumb,
                &doc.colors.selection_bg,
                &doc.colors.selection_fg,
                &doc.colors.split,
                &doc.colors.visual_bell,
                &doc.colors.tab_bar.background,
                &doc.colors.tab_bar.inactive_tab_edge,
            ] {
                assert!(parse_hex(hex).is_ok(), "{}: {hex:?}", p.id);
            }
            for state in [
                &doc.colors.tab_bar.active_tab,
                &doc.colors.tab_bar.inactive_tab,
                &doc.colors.tab_bar.inactive_tab_hover,
                &doc.colors.tab_bar.new_tab,
                &doc.colors.tab_bar.new_tab_hover,
            ] {
                assert!(parse_hex(&state.bg_color).is_ok(), "{}", p.id);
                assert!(parse_hex(&state.fg_color).is_ok(), "{}", p.id);
                assert_eq!(state.intensity, "Normal");
                assert!(!state.italic);
                assert!(!state.strikethrough);
                assert_eq!(state.underline, "None");
            }
        }
    }

    #[test]
    fn test_dark_slot_substitutions() {
        let p = find("qadr-fajr");
        let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
        assert_eq!(doc.colors.ansi[0], p.surfaces.surface1);
        assert_eq!(doc.colors.ansi[7], p.texts.subtext1);
        assert_eq!(doc.colors.brights[0], p.surfaces.surface2);
        assert_eq!(doc.colors.brights[7], p.texts.subtext0);
        assert_eq!(doc.colors.cursor_fg, p.surfaces.crust);
        assert_eq!(doc.colors.tab_bar.active_tab.bg_color, p.accent);
        assert_eq!(doc.colors.tab_bar.active_tab.fg_color, p.surfaces.crust);
    }

    #[test]
    fn test_light_slot_substitutions() {
        let p = find("nur");
        let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
        assert_eq!(doc.colors.ansi[0], p.texts.subtext1);
        assert_eq!(doc.colors.ansi[7], p.surfaces.surface2);
        assert_eq!(doc.colors.brights[0], p.texts.subtext0);
        assert_eq!(doc.colors.brights[7], p.surfaces.surface1);
        assert_eq!(doc.colors.cursor_fg, p.surfaces.base);
        assert_eq!(doc.colors.tab_bar.active_tab.fg_color, "#ffffff");
    }

    #[test]
    fn test_hc_ivory_renders_as_dark() {
        // High-contrast palettes take the dark-mode substitutions even when
        // built from a light base
        let p = find("hc-ivory");
        let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
        assert_eq!(doc.colors.ansi[0], p.surfaces.surface1);
        assert_eq!(doc.colors.cursor_fg, p.surfaces.crust);
    }

    #[test]
    fn test_indexed_overrides() {
        let p = find("qadr-fajr");
        let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
        assert_eq!(doc.colors.indexed.get("16").unwrap(), p.syntax.orange);
        assert_eq!(doc.colors.indexed.get("17").unwrap(), p.syntax.salmon);
        assert_eq!(doc.colors.indexed.len(), 2);
    }

    #[test]
    fn test_metadata_block() {
        let p = find("qadr-fajr");
        let doc: SchemeDoc = toml::from_str(&render(&p)).unwrap();
        assert!(doc.metadata.aliases.is_empty());
        assert_eq!(doc.metadata.author, "meastblue");
        assert_eq!(doc.metadata.name, "Nerv Dark - Qadr Fajr");
    }
}
