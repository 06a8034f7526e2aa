use super::{Annotated, LabelPositionMap, PositionLabelList};
use log::debug;

/// Generate a map of annotation labels and their corresponding sequence positions.
///
/// Ranges sharing a label are merged; a range with `start > end` contributes
/// nothing but still registers its label.
pub fn parse_annotations_by_label<'a, A, I>(annotations: I) -> LabelPositionMap
where
    A: Annotated + 'a,
    I: IntoIterator<Item = &'a A>,
{
    let mut parsed = LabelPositionMap::default();
    for annotation in annotations {
        if annotation.start() > annotation.end() {
            debug!(
                "Empty range {}..={} for label '{}'",
                annotation.start(),
                annotation.end(),
                annotation.label()
            );
        }
        parsed.insert_range(annotation.label(), annotation.range());
    }
    debug!("Indexed {} annotation labels", parsed.len());
    parsed
}

/// Generate a list of sequence positions and their corresponding annotation labels.
///
/// See [`LabelPositionMap::labels_by_position`] for the covered range.
pub fn parse_annotations_by_index<'a, A, I>(
    annotations: I,
    sequence_length: usize,
) -> PositionLabelList
where
    A: Annotated + 'a,
    I: IntoIterator<Item = &'a A>,
{
    parse_annotations_by_label(annotations).labels_by_position(sequence_length)
}
