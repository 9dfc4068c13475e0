// Output orchestration
//
// Builds the registry once, renders every scheme plus the plugin module, and
// writes them to the fixed output locations. Stale scheme files (from since
// removed identifiers) are cleared before writing so dist/ always mirrors
// the registry exactly. Any I/O failure is fatal and propagates.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::plugin;
use crate::registry;
use crate::scheme;

/// Scheme files land here, one per palette.
pub const SCHEME_DIR: &str = "dist";

/// The Lua plugin directory; holds the single `init.lua`.
pub const PLUGIN_DIR: &str = "plugin";

/// What a run produced, for the final summary line and for tests.
pub struct Summary {
    pub schemes: usize,
    pub plugin_path: PathBuf,
}

pub fn run(scheme_dir: &Path, plugin_dir: &Path) -> Result<Summary> {
    let palettes = registry::palettes()?;

    fs::create_dir_all(scheme_dir)
        .with_context(|| format!("failed to create {}", scheme_dir.display()))?;
    fs::create_dir_all(plugin_dir)
        .with_context(|| format!("failed to create {}", plugin_dir.display()))?;

    clear_generated(scheme_dir)?;

    for palette in &palettes {
        let path = scheme_dir.join(format!("nerv-{}.toml", palette.id));
        fs::write(&path, scheme::render(palette))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    let plugin_path = plugin_dir.join("init.lua");
    fs::write(&plugin_path, plugin::render(&palettes))
        .with_context(|| format!("failed to write {}", plugin_path.display()))?;
    info!("wrote {}", plugin_path.display());

    Ok(Summary {
        schemes: palettes.len(),
        plugin_path,
    })
}

/// Remove every regular file in `dir`, leaving subdirectories alone.
fn clear_generated(dir: &Path) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        let path = entry.path();
        if entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?
            .is_file()
        {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove stale {}", path.display()))?;
        }
    }
    Ok(())
}
