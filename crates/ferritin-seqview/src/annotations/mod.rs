//! # Annotations
//!
//! Labeled ranges over a sequence (domains, motifs, binding sites) and the two
//! derived indexes used for display:
//!
//! - [`LabelPositionMap`]: label -> every position the label covers.
//! - [`PositionLabelList`]: position -> every label covering it.
//!
//! and [`format_annotations`], which turns the label index into marker strings
//! that line up under a formatted sequence.
//!
//! Positions are 1-based and ranges are inclusive at both ends.
mod indexer;
mod positions;
mod render;

pub use indexer::{parse_annotations_by_index, parse_annotations_by_label};
pub use positions::Positions;
pub use render::{format_annotations, ABSENT_MARKER, PRESENT_MARKER};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Anything exposing a labeled inclusive range.
pub trait Annotated {
    fn start(&self) -> i64;
    fn end(&self) -> i64;
    fn label(&self) -> &str;

    fn range(&self) -> RangeInclusive<i64> {
        self.start()..=self.end()
    }
}

/// A labeled interval `[start, end]` over 1-based sequence positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub start: i64,
    pub end: i64,
    pub label: String,
}

impl Annotation {
    pub fn new(start: i64, end: i64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

impl Annotated for Annotation {
    fn start(&self) -> i64 {
        self.start
    }
    fn end(&self) -> i64 {
        self.end
    }
    fn label(&self) -> &str {
        &self.label
    }
}

/// Label -> covered positions, iterated in label insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelPositionMap {
    labels: IndexMap<String, Positions>,
}

/// Per-position label lists; entry `i` holds the labels covering position `i + 1`.
pub type PositionLabelList = Vec<Vec<String>>;

/// Label -> marker string, in selection order.
pub type RenderedAnnotationTrack = IndexMap<String, String>;

impl LabelPositionMap {
    /// Union `range` into the positions of `label`, registering the label even
    /// when the range is empty.
    pub fn insert_range(&mut self, label: &str, range: RangeInclusive<i64>) {
        match self.labels.get_mut(label) {
            Some(positions) => positions.extend_range(range),
            None => {
                self.labels
                    .insert(label.to_string(), Positions::from_range(range));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Positions> {
        self.labels.get(label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Positions)> + '_ {
        self.labels.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels covering each position in `1..sequence_length`.
    ///
    /// The last position (`sequence_length`) is not included, so the result has
    /// `sequence_length - 1` entries.
    pub fn labels_by_position(&self, sequence_length: usize) -> PositionLabelList {
        (1..sequence_length)
            .map(|idx| {
                self.iter()
                    .filter(|(_, positions)| positions.contains(idx as i64))
                    .map(|(label, _)| label.to_string())
                    .collect()
            })
            .collect()
    }

    /// Re-express the map as annotations, one per run of consecutive positions.
    /// Labels with no positions are dropped.
    pub fn to_annotations(&self) -> Vec<Annotation> {
        self.iter()
            .flat_map(|(label, positions)| {
                positions
                    .to_ranges()
                    .into_iter()
                    .map(move |range| Annotation::new(*range.start(), *range.end(), label))
            })
            .collect()
    }
}

impl FromIterator<(String, Positions)> for LabelPositionMap {
    fn from_iter<T: IntoIterator<Item = (String, Positions)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}
