// Palette registry - the 31 Nerv palettes as literal data
//
// One module per family for easy editing without loading every table into
// view. Construction happens once at startup from the literal tables; the
// returned order is the output iteration order and nothing more.

mod adam;
mod djinn;
mod eva;
mod hc;
mod magi;
mod nebula;
mod nur;
mod orbital;
mod qadr;
mod sahara;

use anyhow::Result;

use crate::palette::Palette;

/// Build every palette, in output order.
pub fn palettes() -> Result<Vec<Palette>> {
    let mut all = Vec::new();
    all.extend(qadr::palettes()?);
    all.extend(orbital::palettes()?);
    all.extend(djinn::palettes()?);
    all.extend(sahara::palettes()?);
    all.extend(nebula::palettes()?);
    all.extend(eva::palettes()?);
    all.extend(magi::palettes()?);
    all.extend(adam::palettes()?);
    all.extend(nur::palettes()?);
    all.extend(hc::palettes()?);
    Ok(all)
}
