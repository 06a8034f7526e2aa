//! # ferritin-seqview
//!
//! Terminal presentation helpers for protein sequences.
//!
//! - [`format_seq`]: lay a sequence out in numbered, colored blocks.
//! - [`parse_annotations_by_label`] / [`parse_annotations_by_index`]: index
//!   labeled ranges by label or by position.
//! - [`format_annotations`]: render marker strings (`_✔✔_`) that line up under
//!   a formatted sequence.
//!
//! ## Usage
//!
//! ```no_run
//! use ferritin_seqview::{format_annotations, parse_annotations_by_label, Annotation, SeqFormat, AnsiColorizer};
//!
//! let sequence = "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG";
//! let annotations = vec![Annotation::new(1, 7, "beta-1"), Annotation::new(23, 34, "alpha-1")];
//!
//! let layout = SeqFormat::builder().width(40).build();
//! let colorizer = AnsiColorizer::new();
//! println!("{}", layout.format(sequence, &colorizer).unwrap());
//!
//! let parsed = parse_annotations_by_label(&annotations);
//! let tracks = format_annotations(&parsed, sequence.len(), None).unwrap();
//! for (label, track) in tracks {
//!     println!("{label}");
//!     println!("{}", layout.format(&track, &colorizer).unwrap());
//! }
//! ```
pub mod annotations;
pub mod colors;
pub mod error;
pub mod format;

pub use annotations::{
    format_annotations, parse_annotations_by_index, parse_annotations_by_label, Annotated,
    Annotation, LabelPositionMap, PositionLabelList, Positions, RenderedAnnotationTrack,
};
pub use colors::{
    color_amino_acid, color_protein_sequence, color_text, AnsiColorizer, BuiltinSchemes,
    ColorScheme, Colorizer, Rgb, SchemeLookup,
};
pub use error::{Result, SeqViewError};
pub use format::{format_seq, SeqFormat};
