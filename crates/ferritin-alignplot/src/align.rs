//! Pairwise protein alignment.
//!
//! Scoring uses BLOSUM62 with an affine gap penalty where the first residue of
//! a gap costs [`GAP_OPEN`] and each further residue [`GAP_EXTEND`]. The
//! alignment is global, but terminal gaps are free. The dynamic programming
//! itself is done by `bio`.
use crate::error::{AlignPlotError, Result};
use bio::alignment::pairwise::{Aligner, Scoring, MIN_SCORE};
use bio::alignment::{Alignment, AlignmentOperation};
use bio::scores::blosum62;
use ferritin_seqview::colors::PROTEIN_ALPHABET;
use log::debug;
use std::ops::Range;

pub const GAP_OPEN: i32 = -10;
pub const GAP_EXTEND: i32 = -1;
/// Gap symbol in the aligned rows.
pub const GAP: u8 = b'-';

/// Two gapped rows of equal length plus the alignment score.
#[derive(Clone, Debug, PartialEq)]
pub struct ProteinAlignment {
    reference: Vec<u8>,
    prediction: Vec<u8>,
    score: i32,
    /// Columns between the leading and trailing terminal gaps.
    core: Range<usize>,
}

impl ProteinAlignment {
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of alignment columns, terminal gaps included.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    pub fn prediction(&self) -> &[u8] {
        &self.prediction
    }

    /// `(reference, prediction)` symbol pairs, one per column.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.reference
            .iter()
            .copied()
            .zip(self.prediction.iter().copied())
    }

    /// Identical columns divided by the number of columns, not counting
    /// terminal gaps. Zero when nothing aligned.
    pub fn identity(&self) -> f64 {
        let core = &self.core;
        if core.is_empty() {
            return 0.0;
        }
        let identities = self
            .columns()
            .skip(core.start)
            .take(core.len())
            .filter(|(a, b)| a == b && *a != GAP)
            .count();
        identities as f64 / core.len() as f64
    }
}

/// Similarity of an aligned pair scaled to `[0, 1]`: `2 s(a,b) / (s(a,a) + s(b,b))`,
/// negative values clamped to zero. `None` for gap columns.
pub fn similarity(a: u8, b: u8) -> Option<f64> {
    if a == GAP || b == GAP {
        return None;
    }
    let self_score = blosum62(a, a) + blosum62(b, b);
    if self_score <= 0 {
        return Some(0.0);
    }
    Some((2.0 * blosum62(a, b) as f64 / self_score as f64).clamp(0.0, 1.0))
}

fn prepare(sequence: &str, name: &'static str) -> Result<Vec<u8>> {
    if sequence.is_empty() {
        return Err(AlignPlotError::EmptySequence(name));
    }
    sequence
        .chars()
        .enumerate()
        .map(|(i, residue)| {
            let upper = residue.to_ascii_uppercase();
            if PROTEIN_ALPHABET.contains(&upper) {
                Ok(upper as u8)
            } else {
                Err(AlignPlotError::InvalidResidue {
                    residue,
                    position: i + 1,
                    sequence: name,
                })
            }
        })
        .collect()
}

/// The sequence left unaligned at one end of the alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overhang {
    Reference,
    Prediction,
}

/// Every placement of the leading and trailing terminal gaps.
const OVERHANGS: [(Overhang, Overhang); 4] = [
    (Overhang::Reference, Overhang::Reference),
    (Overhang::Reference, Overhang::Prediction),
    (Overhang::Prediction, Overhang::Reference),
    (Overhang::Prediction, Overhang::Prediction),
];

/// Clip penalties `(reference, prediction)` for one end: free on the
/// overhanging side, forbidden on the other.
fn clip_penalties(overhang: Overhang) -> (i32, i32) {
    match overhang {
        Overhang::Reference => (0, MIN_SCORE),
        Overhang::Prediction => (MIN_SCORE, 0),
    }
}

/// Global alignment with the terminal gaps of each end placed as given.
fn align_with_overhangs(
    x: &[u8],
    y: &[u8],
    (prefix, suffix): (Overhang, Overhang),
) -> Alignment {
    let (x_prefix, y_prefix) = clip_penalties(prefix);
    let (x_suffix, y_suffix) = clip_penalties(suffix);
    // bio charges `open + len * extend` for a gap of length `len`
    let scoring = Scoring::new(GAP_OPEN - GAP_EXTEND, GAP_EXTEND, blosum62)
        .xclip_prefix(x_prefix)
        .yclip_prefix(y_prefix)
        .xclip_suffix(x_suffix)
        .yclip_suffix(y_suffix);
    Aligner::with_capacity_and_scoring(x.len(), y.len(), scoring).custom(x, y)
}

/// Optimal global alignment of two protein sequences. Terminal gaps cost
/// nothing; at each end only one of the two sequences may overhang.
pub fn align_optimal(seq_1: &str, seq_2: &str) -> Result<ProteinAlignment> {
    let x = prepare(seq_1, "reference")?;
    let y = prepare(seq_2, "prediction")?;

    let mut alignment = align_with_overhangs(&x, &y, OVERHANGS[0]);
    for &overhangs in &OVERHANGS[1..] {
        let candidate = align_with_overhangs(&x, &y, overhangs);
        if candidate.score > alignment.score {
            alignment = candidate;
        }
    }
    debug!(
        "Aligned {}..{} of reference to {}..{} of prediction, score {}",
        alignment.xstart, alignment.xend, alignment.ystart, alignment.yend, alignment.score
    );

    let mut reference = Vec::with_capacity(x.len() + y.len());
    let mut prediction = Vec::with_capacity(x.len() + y.len());

    // Leading terminal gaps
    for &res in &x[..alignment.xstart] {
        reference.push(res);
        prediction.push(GAP);
    }
    for &res in &y[..alignment.ystart] {
        reference.push(GAP);
        prediction.push(res);
    }

    let core_start = reference.len();
    let (mut xi, mut yi) = (alignment.xstart, alignment.ystart);
    for op in &alignment.operations {
        match op {
            AlignmentOperation::Match | AlignmentOperation::Subst => {
                reference.push(x[xi]);
                prediction.push(y[yi]);
                xi += 1;
                yi += 1;
            }
            AlignmentOperation::Del => {
                reference.push(GAP);
                prediction.push(y[yi]);
                yi += 1;
            }
            AlignmentOperation::Ins => {
                reference.push(x[xi]);
                prediction.push(GAP);
                xi += 1;
            }
            AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_) => {}
        }
    }
    let core_end = reference.len();

    // Trailing terminal gaps
    for &res in &x[xi..] {
        reference.push(res);
        prediction.push(GAP);
    }
    for &res in &y[yi..] {
        reference.push(GAP);
        prediction.push(res);
    }

    Ok(ProteinAlignment {
        reference,
        prediction,
        score: alignment.score,
        core: core_start..core_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences() {
        let aln = align_optimal("MQIFVKTLTG", "MQIFVKTLTG").unwrap();
        assert_eq!(aln.reference(), b"MQIFVKTLTG");
        assert_eq!(aln.prediction(), b"MQIFVKTLTG");
        assert_eq!(aln.identity(), 1.0);
        let expected: i32 = b"MQIFVKTLTG".iter().map(|&r| blosum62(r, r)).sum();
        assert_eq!(aln.score(), expected);
    }

    #[test]
    fn test_lowercase_is_accepted() {
        let aln = align_optimal("mqifv", "MQIFV").unwrap();
        assert_eq!(aln.identity(), 1.0);
    }

    #[test]
    fn test_terminal_gaps_are_free() {
        let aln = align_optimal("MQIFVKTLTG", "IFVKTL").unwrap();
        assert_eq!(aln.len(), 10);
        assert_eq!(aln.prediction(), b"--IFVKTL--");
        assert_eq!(aln.identity(), 1.0);
        let expected: i32 = b"IFVKTL".iter().map(|&r| blosum62(r, r)).sum();
        assert_eq!(aln.score(), expected);
    }

    #[test]
    fn test_overhangs_at_opposite_ends() {
        let aln = align_optimal("MQIFVKTL", "IFVKTLTG").unwrap();
        assert_eq!(aln.reference(), b"MQIFVKTL--");
        assert_eq!(aln.prediction(), b"--IFVKTLTG");
        assert_eq!(aln.identity(), 1.0);
    }

    #[test]
    fn test_terminal_substitution_stays_aligned() {
        let aln = align_optimal("MQIFVKTLTGA", "MQIFVKTLTGW").unwrap();
        assert_eq!(aln.reference(), b"MQIFVKTLTGA");
        assert_eq!(aln.prediction(), b"MQIFVKTLTGW");
        assert!((aln.identity() - 10.0 / 11.0).abs() < 1e-9);
        let expected: i32 =
            b"MQIFVKTLTG".iter().map(|&r| blosum62(r, r)).sum::<i32>() + blosum62(b'A', b'W');
        assert_eq!(aln.score(), expected);
    }

    #[test]
    fn test_dissimilar_ends_are_not_clipped_on_both_sides() {
        let aln = align_optimal("WWWWWKKKKK", "CCCCCKKKKK").unwrap();
        assert_eq!(aln.len(), 10);
        assert_eq!(aln.reference(), b"WWWWWKKKKK");
        assert_eq!(aln.prediction(), b"CCCCCKKKKK");
        assert_eq!(aln.identity(), 0.5);
        assert_eq!(aln.score(), 5 * blosum62(b'W', b'C') + 5 * blosum62(b'K', b'K'));
    }

    #[test]
    fn test_rows_have_equal_length_and_keep_residues() {
        let x = "MQIFVKTLTGKTITLEVEPS";
        let y = "MQIFVKTGKTITLEVWWEPS";
        let aln = align_optimal(x, y).unwrap();
        assert_eq!(aln.reference().len(), aln.prediction().len());
        let strip = |row: &[u8]| {
            row.iter()
                .filter(|&&c| c != GAP)
                .map(|&c| c as char)
                .collect::<String>()
        };
        assert_eq!(strip(aln.reference()), x);
        assert_eq!(strip(aln.prediction()), y);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            align_optimal("", "MQ"),
            Err(AlignPlotError::EmptySequence("reference"))
        ));
        assert!(matches!(
            align_optimal("MQ", "M1"),
            Err(AlignPlotError::InvalidResidue {
                residue: '1',
                position: 2,
                sequence: "prediction"
            })
        ));
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity(b'W', b'W'), Some(1.0));
        assert_eq!(similarity(b'A', GAP), None);
        // W/A scores -3 in BLOSUM62
        assert_eq!(similarity(b'W', b'A'), Some(0.0));
        let ile_val = similarity(b'I', b'V').unwrap();
        assert!(ile_val > 0.0 && ile_val < 1.0);
    }
}
