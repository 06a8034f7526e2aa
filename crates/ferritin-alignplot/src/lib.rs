//! # ferritin-alignplot
//!
//! Align two protein sequences and draw the alignment as an SVG, shading each
//! column by how similar the aligned residues are.
//!
//! ```no_run
//! use ferritin_alignplot::quick_alignment_plot;
//!
//! let (alignment, document) = quick_alignment_plot(
//!     "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG",
//!     "MQIFVKTLTGKTITLEVEASDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLADYNIQKESTLHLVLRLRGG",
//! ).unwrap();
//! println!("Alignment Score: {}", alignment.score());
//! svg::save("alignment.svg", &document).unwrap();
//! ```
pub mod align;
pub mod error;
pub mod plot;

pub use align::{align_optimal, ProteinAlignment};
pub use error::{AlignPlotError, Result};
pub use plot::AlignmentPlot;

use log::info;
use svg::Document;

/// Align two sequences with the default scoring and plot them with the
/// default [`AlignmentPlot`] options.
pub fn quick_alignment_plot(seq_1: &str, seq_2: &str) -> Result<(ProteinAlignment, Document)> {
    let alignment = align_optimal(seq_1, seq_2)?;
    info!("Alignment Score: {}", alignment.score());
    info!("Sequence identity: {}", alignment.identity());
    let document = AlignmentPlot::default().plot(&alignment)?;
    Ok((alignment, document))
}
