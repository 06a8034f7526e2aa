use anyhow::{Context, Result};
use ferritin_molview::quick_pdb_plot;
use log::info;
use std::fs;

pub fn execute(pdb: String, output: String, width: u32, height: u32, color: String) -> Result<()> {
    let pdb_str =
        fs::read_to_string(&pdb).with_context(|| format!("Failed to read PDB file {pdb}"))?;
    let html = quick_pdb_plot(&pdb_str, width, height, &color)?;
    fs::write(&output, html).with_context(|| format!("Failed to write {output}"))?;
    info!("Wrote structure view to {output}");
    Ok(())
}
