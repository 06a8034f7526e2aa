use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqViewError {
    /// The colorizer has no color for this character.
    #[error("Unknown residue '{residue}' for color scheme '{scheme}'")]
    UnknownResidue { residue: char, scheme: String },

    /// An annotation filter referenced a label that was never indexed.
    #[error("Annotation label not found: {0}")]
    KeyNotFound(String),

    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, SeqViewError>;
