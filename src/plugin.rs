// WezTerm Lua plugin renderer
//
// Pure function from the full registry to a single `init.lua` module: a
// colors table keyed by flavor id (syntax hues renamed into the Catppuccin
// vocabulary the plugin API exposes), a name-mapping table, and the runtime
// select/merge functions executed by WezTerm's config engine, not by this
// generator. The runtime tail below is fixed text; only the two tables are
// data-driven.

use std::fmt::Write as _;

use crate::palette::Palette;

pub fn render(palettes: &[Palette]) -> String {
    let entries: Vec<String> = palettes.iter().map(color_entry).collect();
    let mappings: Vec<String> = palettes
        .iter()
        .map(|p| format!("\t[\"{}\"] = \"{}\",", p.id, p.display_name()))
        .collect();

    format!(
        "local wezterm = require(\"wezterm\")\n\nlocal M = {{}}\n\nlocal colors = {{\n{}\n}}\n\nlocal mappings = {{\n{}\n}}\n\n{}",
        entries.join("\n"),
        mappings.join("\n"),
        RUNTIME,
    )
}

/// One colors-table entry. The ten syntax hues map into the plugin's fixed
/// vocabulary: salmon doubles as rosewater/maroon, orange as flamingo/peach,
/// purple as mauve/lavender, and blue fills sky/sapphire/blue. The alternate
/// green has no slot in this vocabulary and is not exported.
fn color_entry(p: &Palette) -> String {
    let syn = p.syntax;
    let s = &p.surfaces;
    let t = &p.texts;

    let fields: [(&str, &str); 27] = [
        ("rosewater", syn.salmon),
        ("flamingo", syn.orange),
        ("pink", syn.pink),
        ("mauve", syn.purple),
        ("red", syn.red),
        ("maroon", syn.salmon),
        ("peach", syn.orange),
        ("yellow", syn.yellow),
        ("green", syn.green),
        ("teal", syn.turquoise),
        ("sky", syn.blue),
        ("sapphire", syn.blue),
        ("blue", syn.blue),
        ("lavender", syn.purple),
        ("text", &t.text),
        ("subtext1", &t.subtext1),
        ("subtext0", &t.subtext0),
        ("overlay2", &t.overlay2),
        ("overlay1", &t.overlay1),
        ("overlay0", &t.overlay0),
        ("surface2", &s.surface2),
        ("surface1", &s.surface1),
        ("surface0", &s.surface0),
        ("base", &s.base),
        ("mantle", &s.mantle),
        ("crust", &s.crust),
        ("accent", p.accent),
    ];

    let mut entry = String::new();
    let _ = writeln!(entry, "\t[\"{}\"] = {{", p.id);
    for (key, value) in fields {
        let _ = writeln!(entry, "\t\t{key} = \"{value}\",");
    }
    entry.push_str("\t},");
    entry
}

// The runtime half of the module. Note the isDark check: it compares the
// base color's red channel lexically against "80" rather than computing
// luminance. Almost certainly an approximation bug in the reference plugin,
// but kept verbatim - a true luminance check would reshuffle cursor and tab
// colors for edge-case bases.
const RUNTIME: &str = r##"function M.select(palette, flavor, accent)
	local c = palette[flavor]
	if not c then
		error("Unknown flavor: " .. tostring(flavor))
	end

	local isDark = c.base:sub(2, 3):lower() < "80"
	local accentColor = accent and c[accent] or c.accent

	return {
		foreground = c.text,
		background = c.base,

		cursor_fg = isDark and c.crust or c.base,
		cursor_bg = c.rosewater,
		cursor_border = c.rosewater,

		selection_fg = c.text,
		selection_bg = c.surface2,

		scrollbar_thumb = c.surface2,

		split = c.overlay0,

		ansi = {
			isDark and c.surface1 or c.subtext1,
			c.red,
			c.green,
			c.yellow,
			c.blue,
			c.pink,
			c.teal,
			isDark and c.subtext1 or c.surface2,
		},

		brights = {
			isDark and c.surface2 or c.subtext0,
			c.red,
			c.green,
			c.yellow,
			c.blue,
			c.pink,
			c.teal,
			isDark and c.subtext0 or c.surface1,
		},

		indexed = { [16] = c.peach, [17] = c.rosewater },

		compose_cursor = c.flamingo,

		tab_bar = {
			background = c.crust,
			active_tab = {
				bg_color = accentColor,
				fg_color = isDark and c.crust or "#ffffff",
			},
			inactive_tab = {
				bg_color = c.mantle,
				fg_color = c.text,
			},
			inactive_tab_hover = {
				bg_color = c.base,
				fg_color = c.text,
			},
			new_tab = {
				bg_color = c.surface0,
				fg_color = c.text,
			},
			new_tab_hover = {
				bg_color = c.surface1,
				fg_color = c.text,
			},
			inactive_tab_edge = c.surface0,
		},

		visual_bell = c.surface0,
	}
end

local function select_for_appearance(appearance, options)
	if appearance:find("Dark") then
		return options.dark
	else
		return options.light
	end
end

local function tableMerge(t1, t2)
	for k, v in pairs(t2) do
		if type(v) == "table" then
			if type(t1[k] or false) == "table" then
				tableMerge(t1[k] or {}, t2[k] or {})
			else
				t1[k] = v
			end
		else
			t1[k] = v
		end
	end
	return t1
end

function M.apply_to_config(c, opts)
	if not opts then
		opts = {}
	end

	local defaults = {
		flavor = "qadr-fajr",
		accent = nil,
		sync = false,
		sync_flavors = { light = "nur", dark = "qadr-fajr" },
		color_overrides = {},
		token_overrides = {},
	}

	local o = tableMerge(defaults, opts)

	local color_schemes = {}
	local palette = tableMerge(colors, o.color_overrides)
	for flavor, name in pairs(mappings) do
		local spec = M.select(palette, flavor, o.accent)
		local overrides = o.token_overrides[flavor] or {}
		color_schemes[name] = tableMerge(spec, overrides)
	end
	if c.color_schemes == nil then
		c.color_schemes = {}
	end
	c.color_schemes = tableMerge(c.color_schemes, color_schemes)

	if opts.sync then
		c.color_scheme = select_for_appearance(wezterm.gui.get_appearance(), {
			dark = mappings[o.sync_flavors.dark],
			light = mappings[o.sync_flavors.light],
		})
		c.command_palette_bg_color = select_for_appearance(wezterm.gui.get_appearance(), {
			dark = colors[o.sync_flavors.dark].crust,
			light = colors[o.sync_flavors.light].crust,
		})
		c.command_palette_fg_color = select_for_appearance(wezterm.gui.get_appearance(), {
			dark = colors[o.sync_flavors.dark].text,
			light = colors[o.sync_flavors.light].text,
		})
	else
		c.color_scheme = mappings[o.flavor]
		c.command_palette_bg_color = colors[o.flavor].crust
		c.command_palette_fg_color = colors[o.flavor].text
	end

	local window_frame = {
		active_titlebar_bg = colors[o.flavor].crust,
		active_titlebar_fg = colors[o.flavor].text,
		inactive_titlebar_bg = colors[o.flavor].crust,
		inactive_titlebar_fg = colors[o.flavor].text,
		button_fg = colors[o.flavor].text,
		button_bg = colors[o.flavor].base,
	}

	if c.window_frame == nil then
		c.window_frame = {}
	end
	c.window_frame = tableMerge(c.window_frame, window_frame)
end

M.colors = colors
M.mappings = mappings

return M
"##;
