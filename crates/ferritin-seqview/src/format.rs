//! Sequence Formatting
//!
//! Lays a sequence out in fixed-width lines of colored blocks, optionally
//! prefixed with the 1-based index of the first residue on each line.
//!
//! ```text
//! 1    MQIFVKTLTG KTITLEVEPS
//! 21   DTIENVKAKI QDKEGIPPDQ
//! ```
use crate::colors::{AnsiColorizer, ColorScheme, Colorizer};
use crate::error::{Result, SeqViewError};
use bon::Builder;

/// Layout options for [`SeqFormat::format`].
#[derive(Builder, Clone, Debug)]
pub struct SeqFormat {
    /// Residues per line.
    #[builder(default = 80)]
    pub width: usize,
    /// Residues per block within a line.
    #[builder(default = 10)]
    pub block_size: usize,
    /// Separator emitted between blocks.
    #[builder(into, default = String::from(" "))]
    pub gap: String,
    #[builder(default = true)]
    pub line_numbers: bool,
    #[builder(into, default = ColorScheme::default().to_string())]
    pub color_scheme: String,
}

impl Default for SeqFormat {
    fn default() -> Self {
        SeqFormat::builder().build()
    }
}

impl SeqFormat {
    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(SeqViewError::InvalidLayout("width must be positive".into()));
        }
        if self.block_size == 0 {
            return Err(SeqViewError::InvalidLayout(
                "block size must be positive".into(),
            ));
        }
        Ok(())
    }

    fn line_label(&self, position: usize) -> String {
        if self.line_numbers {
            format!("{:<4} ", position)
        } else {
            String::new()
        }
    }

    /// Format a sequence, coloring each residue with `colorizer`.
    ///
    /// A sequence whose length is a multiple of `width` ends with a line break
    /// followed by the label of the (empty) next line.
    pub fn format<C>(&self, sequence: &str, colorizer: &C) -> Result<String>
    where
        C: Colorizer + ?Sized,
    {
        self.validate()?;
        let residues = colorizer.colorize_each(sequence, &self.color_scheme)?;
        let mut output = self.line_label(1);
        for (i, res) in residues.iter().enumerate() {
            let i = i + 1;
            output.push_str(res);
            if i % self.width == 0 {
                output.push('\n');
                output.push_str(&self.line_label(i + 1));
            } else if i % self.block_size == 0 {
                output.push_str(&self.gap);
            }
        }
        Ok(output)
    }
}

/// Format a biological sequence into pretty blocks with (optional) line numbers,
/// colored with the built-in ANSI colorizer.
pub fn format_seq(
    seq: impl AsRef<str>,
    width: usize,
    block_size: usize,
    gap: &str,
    line_numbers: bool,
    color_scheme_name: &str,
) -> Result<String> {
    SeqFormat::builder()
        .width(width)
        .block_size(block_size)
        .gap(gap)
        .line_numbers(line_numbers)
        .color_scheme(color_scheme_name)
        .build()
        .format(seq.as_ref(), &AnsiColorizer::new())
}
