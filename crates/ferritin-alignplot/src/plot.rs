//! Similarity-based alignment plot.
//!
//! Each aligned pair is drawn on a background whose intensity follows the
//! pair's [`similarity`]; gap columns stay white.
use crate::align::{similarity, ProteinAlignment, GAP};
use crate::error::{AlignPlotError, Result};
use bon::Builder;
use ferritin_seqview::Rgb;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

const MARGIN: f64 = 10.0;
const CELL_WIDTH: f64 = 12.0;
const CELL_HEIGHT: f64 = 16.0;
const LINE_SPACING: f64 = 12.0;
const LABEL_WIDTH: f64 = 90.0;
const NUMBER_WIDTH: f64 = 40.0;
const FONT_SIZE: f64 = 12.0;

/// Plot options.
#[derive(Builder, Clone, Debug)]
pub struct AlignmentPlot {
    /// Row labels: reference first, prediction second.
    #[builder(default = [String::from("Reference"), String::from("Prediction")])]
    labels: [String; 2],
    #[builder(default = 50)]
    symbols_per_line: usize,
    /// Base color; full similarity is drawn in this color, zero in white.
    #[builder(default = Rgb(0, 127, 170))]
    color: Rgb,
    /// Sequence position of the first residue, left of each line.
    #[builder(default = false)]
    show_numbers: bool,
    /// Sequence position of the last residue, right of each line.
    #[builder(default = true)]
    show_line_position: bool,
}

impl Default for AlignmentPlot {
    fn default() -> Self {
        AlignmentPlot::builder().build()
    }
}

// Helper Functions ---------------------------------------------------------------------------

fn blend(base: Rgb, intensity: f64) -> Rgb {
    let mix = |channel: u8| (255.0 - (255.0 - channel as f64) * intensity).round() as u8;
    Rgb(mix(base.0), mix(base.1), mix(base.2))
}

fn create_text(content: impl Into<String>, x: f64, y: f64, anchor: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", "monospace")
        .set("font-size", FONT_SIZE)
        .set("text-anchor", anchor)
}

fn create_cell(x: f64, y: f64, fill: &str) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", CELL_WIDTH)
        .set("height", CELL_HEIGHT)
        .set("fill", fill)
}

// IMPL---------------------------------------------------------------------------

impl AlignmentPlot {
    fn number_width(&self) -> f64 {
        if self.show_numbers {
            NUMBER_WIDTH
        } else {
            0.0
        }
    }

    fn position_width(&self) -> f64 {
        if self.show_line_position {
            NUMBER_WIDTH
        } else {
            0.0
        }
    }

    pub fn plot(&self, alignment: &ProteinAlignment) -> Result<Document> {
        if self.symbols_per_line == 0 {
            return Err(AlignPlotError::InvalidLayout(
                "symbols per line must be positive".into(),
            ));
        }
        let rows = [alignment.reference(), alignment.prediction()];
        let n_lines = alignment.len().div_ceil(self.symbols_per_line);
        let line_height = 2.0 * CELL_HEIGHT + LINE_SPACING;
        let seq_left = MARGIN + LABEL_WIDTH + self.number_width();
        let width = seq_left
            + self.symbols_per_line as f64 * CELL_WIDTH
            + self.position_width()
            + MARGIN;
        let height = 2.0 * MARGIN + n_lines as f64 * line_height;

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        // residues seen so far in each row
        let mut positions = [0usize; 2];
        for line in 0..n_lines {
            let first = line * self.symbols_per_line;
            let last = (first + self.symbols_per_line).min(alignment.len());
            let top = MARGIN + line as f64 * line_height;
            let mut group = Group::new().set("class", "alignment-line");

            for (row, symbols) in rows.iter().enumerate() {
                let y = top + row as f64 * CELL_HEIGHT;
                let baseline = y + CELL_HEIGHT * 0.75;
                group = group.add(create_text(
                    self.labels[row].as_str(),
                    MARGIN,
                    baseline,
                    "start",
                ));
                if self.show_numbers {
                    group = group.add(create_text(
                        (positions[row] + 1).to_string(),
                        seq_left - 4.0,
                        baseline,
                        "end",
                    ));
                }

                for (offset, col) in (first..last).enumerate() {
                    let x = seq_left + offset as f64 * CELL_WIDTH;
                    let intensity = similarity(rows[0][col], rows[1][col]).unwrap_or(0.0);
                    if intensity > 0.0 {
                        group = group.add(create_cell(x, y, &blend(self.color, intensity).to_hex()));
                    }
                    let symbol = symbols[col];
                    if symbol != GAP {
                        positions[row] += 1;
                    }
                    group = group.add(create_text(
                        (symbol as char).to_string(),
                        x + CELL_WIDTH / 2.0,
                        baseline,
                        "middle",
                    ));
                }

                if self.show_line_position {
                    group = group.add(create_text(
                        positions[row].to_string(),
                        seq_left + self.symbols_per_line as f64 * CELL_WIDTH + 4.0,
                        baseline,
                        "start",
                    ));
                }
            }
            document = document.add(group);
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align_optimal;

    #[test]
    fn test_blend() {
        assert_eq!(blend(Rgb(0, 127, 170), 1.0), Rgb(0, 127, 170));
        assert_eq!(blend(Rgb(0, 127, 170), 0.0), Rgb(255, 255, 255));
    }

    #[test]
    fn test_plot_lines() {
        let aln = align_optimal("MQIFVKTLTG", "MQIFVKTLTG").unwrap();
        let plot = AlignmentPlot::builder().symbols_per_line(4).build();
        let svg_text = plot.plot(&aln).unwrap().to_string();
        assert_eq!(svg_text.matches("class=\"alignment-line\"").count(), 3);
        assert_eq!(svg_text.matches("Reference").count(), 3);
        // identical residues get the full base color
        assert!(svg_text.contains("#007FAA"));
    }

    #[test]
    fn test_gap_columns_have_no_cell() {
        let aln = align_optimal("MQIFVKTLTG", "IFVKTL").unwrap();
        let plot = AlignmentPlot::builder()
            .show_line_position(false)
            .build();
        let svg_text = plot.plot(&aln).unwrap().to_string();
        assert_eq!(svg_text.matches("<rect").count(), 6);
    }

    #[test]
    fn test_zero_symbols_per_line() {
        let aln = align_optimal("MQ", "MQ").unwrap();
        let plot = AlignmentPlot::builder().symbols_per_line(0).build();
        assert!(matches!(
            plot.plot(&aln),
            Err(AlignPlotError::InvalidLayout(_))
        ));
    }
}
