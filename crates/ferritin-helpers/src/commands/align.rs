use super::read_fasta;
use anyhow::{anyhow, Context, Result};
use ferritin_alignplot::quick_alignment_plot;
use log::info;

pub fn execute(
    reference: Option<String>,
    prediction: Option<String>,
    fasta: Option<String>,
    output: String,
) -> Result<()> {
    let (reference, prediction) = match (reference, prediction, fasta) {
        (Some(reference), Some(prediction), _) => (reference, prediction),
        (_, _, Some(path)) => {
            let mut records = read_fasta(&path)?.into_iter().map(|(_, seq)| seq);
            match (records.next(), records.next()) {
                (Some(reference), Some(prediction)) => (reference, prediction),
                _ => return Err(anyhow!("{path} must contain two FASTA records")),
            }
        }
        _ => return Err(anyhow!("Provide --reference and --prediction, or --fasta")),
    };

    let (alignment, document) = quick_alignment_plot(&reference, &prediction)?;
    println!("Alignment Score: {}", alignment.score());
    println!("Sequence identity: {}", alignment.identity());

    svg::save(&output, &document).with_context(|| format!("Failed to write {output}"))?;
    info!("Wrote alignment plot to {output}");
    Ok(())
}
