use super::{LabelPositionMap, Positions, RenderedAnnotationTrack};
use crate::error::{Result, SeqViewError};

/// Marks a position covered by the label.
pub const PRESENT_MARKER: char = '✔';
/// Marks a position not covered by the label.
pub const ABSENT_MARKER: char = '_';

fn render_track(positions: &Positions, length: usize) -> String {
    let mut track = vec![ABSENT_MARKER; length];
    for position in positions.iter() {
        if position >= 1 && (position as usize) <= length {
            track[position as usize - 1] = PRESENT_MARKER;
        }
    }
    track.into_iter().collect()
}

/// Render one marker string of `length` characters per label.
///
/// With a non-empty `filter` only those labels are rendered, in the filter's
/// order; a filter label that is not in `parsed_annotations` is an error.
/// Positions outside `1..=length` are skipped.
pub fn format_annotations(
    parsed_annotations: &LabelPositionMap,
    length: usize,
    filter: Option<&[&str]>,
) -> Result<RenderedAnnotationTrack> {
    match filter {
        Some(filter) if !filter.is_empty() => filter
            .iter()
            .map(|&label| {
                parsed_annotations
                    .get(label)
                    .map(|positions| (label.to_string(), render_track(positions, length)))
                    .ok_or_else(|| SeqViewError::KeyNotFound(label.to_string()))
            })
            .collect(),
        _ => Ok(parsed_annotations
            .iter()
            .map(|(label, positions)| (label.to_string(), render_track(positions, length)))
            .collect()),
    }
}
