use crate::cli::{LayoutArgs, SequenceInput};
use anyhow::Result;
use ferritin_seqview::AnsiColorizer;

pub fn execute(input: SequenceInput, layout: LayoutArgs) -> Result<()> {
    let sequence = input.read()?;
    let formatted = layout.to_format().format(&sequence, &AnsiColorizer::new())?;
    println!("{formatted}");
    Ok(())
}
