use anyhow::Result;
use ferritin_seqview::ColorScheme;

pub fn execute() -> Result<()> {
    for name in ColorScheme::names() {
        println!("{name}");
    }
    Ok(())
}
