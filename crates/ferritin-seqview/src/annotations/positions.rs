//! Position sets

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Positions
///
/// A set of unique 1-based sequence positions covered by one annotation label.
/// Iteration is always in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Positions {
    pub(crate) indices: BTreeSet<i64>,
}

impl Positions {
    pub fn new(indices: impl IntoIterator<Item = i64>) -> Self {
        Positions {
            indices: indices.into_iter().collect(),
        }
    }

    /// Every position of an inclusive range. A reversed range is empty.
    pub fn from_range(range: RangeInclusive<i64>) -> Self {
        Positions::new(range)
    }

    pub fn contains(&self, position: i64) -> bool {
        self.indices.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.indices.iter().copied()
    }

    /// Merge a range into this set in place.
    pub fn extend_range(&mut self, range: RangeInclusive<i64>) {
        self.indices.extend(range);
    }

    /// Collapse the set into maximal runs of consecutive positions.
    pub fn to_ranges(&self) -> Vec<RangeInclusive<i64>> {
        self.indices
            .iter()
            .copied()
            .map(|p| (p, p))
            .coalesce(|(start, end), (next_start, next_end)| {
                if next_start == end + 1 {
                    Ok((start, next_end))
                } else {
                    Err(((start, end), (next_start, next_end)))
                }
            })
            .map(|(start, end)| start..=end)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_range_merges_overlaps() {
        let mut p = Positions::from_range(2..=4);
        p.extend_range(4..=6);
        p.extend_range(9..=9);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 9]);
        assert_eq!(p.to_ranges(), vec![2..=6, 9..=9]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let p = Positions::from_range(5..=2);
        assert!(p.is_empty());
    }

    #[test]
    fn test_to_ranges() {
        let p = Positions::new([7, 1, 2, 3, 5, 6, 10]);
        assert_eq!(p.to_ranges(), vec![1..=3, 5..=7, 10..=10]);
        assert!(Positions::default().to_ranges().is_empty());
    }
}
