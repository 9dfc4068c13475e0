// Nerv WezTerm theme generator
//
// Derives the 31 Nerv color palettes from literal base/accent/syntax tables
// and emits one WezTerm TOML scheme per palette plus a Lua plugin module.
//
// Architecture:
// - color: HSL lighten/darken/desaturate helpers over hex strings
// - palette: data model and the dark/light derivation constructors
// - registry: the literal palette tables, one module per family
// - scheme / plugin: pure data-to-text renderers
// - generate: writes everything to dist/ and plugin/, clearing stale files
//
// No flags, no configuration: the registry is compiled in and the output
// locations are fixed. Runs once to completion or fails on the first I/O
// error.

mod color;
mod generate;
mod palette;
mod plugin;
mod registry;
mod scheme;

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG overrides the default per-file confirmation output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "nerv_wezterm=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let summary = generate::run(
        Path::new(generate::SCHEME_DIR),
        Path::new(generate::PLUGIN_DIR),
    )?;
    tracing::info!(
        "generated {} Nerv WezTerm color schemes + {}",
        summary.schemes,
        summary.plugin_path.display()
    );
    Ok(())
}
