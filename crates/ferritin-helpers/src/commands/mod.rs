pub mod align;
pub mod annotate;
pub mod format;
pub mod schemes;
pub mod view;

use crate::cli::SequenceInput;
use anyhow::{anyhow, Context, Result};
use bio::io::fasta;
use log::debug;
use std::fs::File;

/// Read every record of a FASTA file as `(id, sequence)`.
pub fn read_fasta(path: &str) -> Result<Vec<(String, String)>> {
    let file = File::open(path).with_context(|| format!("Failed to open FASTA file {path}"))?;
    fasta::Reader::new(file)
        .records()
        .map(|record| {
            let record = record.with_context(|| format!("Malformed FASTA record in {path}"))?;
            let sequence = String::from_utf8(record.seq().to_vec())
                .with_context(|| format!("Non UTF-8 sequence for {}", record.id()))?;
            Ok((record.id().to_string(), sequence))
        })
        .collect()
}

impl SequenceInput {
    pub fn read(&self) -> Result<String> {
        match (&self.sequence, &self.fasta) {
            (Some(sequence), _) => Ok(sequence.trim().to_string()),
            (None, Some(path)) => {
                let (id, sequence) = read_fasta(path)?
                    .into_iter()
                    .next()
                    .ok_or_else(|| anyhow!("No records in FASTA file {path}"))?;
                debug!("Read {} residues of {} from {}", sequence.len(), id, path);
                Ok(sequence)
            }
            (None, None) => Err(anyhow!("Either --sequence or --fasta is required")),
        }
    }
}
