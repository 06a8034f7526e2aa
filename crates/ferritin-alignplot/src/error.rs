use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignPlotError {
    #[error("Empty {0} sequence")]
    EmptySequence(&'static str),

    #[error("Invalid residue '{residue}' at position {position} of the {sequence} sequence")]
    InvalidResidue {
        residue: char,
        position: usize,
        sequence: &'static str,
    },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, AlignPlotError>;
