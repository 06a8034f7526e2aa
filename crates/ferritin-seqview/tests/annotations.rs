use ferritin_seqview::annotations::{ABSENT_MARKER, PRESENT_MARKER};
use ferritin_seqview::{
    format_annotations, parse_annotations_by_index, parse_annotations_by_label, Annotation,
    SeqViewError,
};
use ferritin_test_data::TestFile;

fn ubiquitin_annotations() -> Vec<Annotation> {
    serde_json::from_str(TestFile::ubiquitin_annotations().as_str()).unwrap()
}

#[test]
fn test_fixture_by_label() {
    let parsed = parse_annotations_by_label(&ubiquitin_annotations());
    assert_eq!(
        parsed.labels().collect::<Vec<_>>(),
        vec![
            "beta-strand",
            "alpha-helix",
            "3-10 helix",
            "ubiquitination site"
        ]
    );
    assert_eq!(parsed.get("beta-strand").unwrap().len(), 7 + 8 + 6 + 2 + 7);
    assert_eq!(
        parsed
            .get("ubiquitination site")
            .unwrap()
            .iter()
            .collect::<Vec<_>>(),
        vec![6, 48, 63]
    );
}

#[test]
fn test_non_overlapping_ranges_round_trip() {
    let annotations = vec![
        Annotation::new(1, 3, "A"),
        Annotation::new(4, 5, "B"),
        Annotation::new(7, 9, "A"),
    ];
    let parsed = parse_annotations_by_label(&annotations);
    // regrouped by label, in order of first appearance
    assert_eq!(
        parsed.to_annotations(),
        vec![
            Annotation::new(1, 3, "A"),
            Annotation::new(7, 9, "A"),
            Annotation::new(4, 5, "B"),
        ]
    );
}

#[test]
fn test_indexing_is_idempotent() {
    let annotations = ubiquitin_annotations();
    let first = parse_annotations_by_label(&annotations);
    let second = parse_annotations_by_label(&annotations);
    assert_eq!(first, second);

    let reparsed = parse_annotations_by_label(&first.to_annotations());
    assert_eq!(first, reparsed);
}

#[test]
fn test_position_index_agrees_with_label_index() {
    let annotations = ubiquitin_annotations();
    let sequence_length = 76;
    let by_label = parse_annotations_by_label(&annotations);
    let by_index = parse_annotations_by_index(&annotations, sequence_length);

    assert_eq!(by_index.len(), sequence_length - 1);
    for p in 1..sequence_length {
        for (label, positions) in by_label.iter() {
            assert_eq!(
                by_index[p - 1].iter().any(|l| l == label),
                positions.contains(p as i64),
                "label {label} at position {p}"
            );
        }
    }
    assert_eq!(by_index[47], vec!["beta-strand", "ubiquitination site"]);
}

#[test]
fn test_rendered_tracks_match_positions() {
    let annotations = ubiquitin_annotations();
    let parsed = parse_annotations_by_label(&annotations);
    let length = 70;
    let tracks = format_annotations(&parsed, length, None).unwrap();

    assert_eq!(tracks.len(), parsed.len());
    for (label, track) in &tracks {
        let positions = parsed.get(label).unwrap();
        assert_eq!(track.chars().count(), length);
        for (offset, marker) in track.chars().enumerate() {
            let expected = if positions.contains(offset as i64 + 1) {
                PRESENT_MARKER
            } else {
                ABSENT_MARKER
            };
            assert_eq!(marker, expected, "label {label} offset {offset}");
        }
    }
}

#[test]
fn test_filter_unknown_label() {
    let parsed = parse_annotations_by_label(&ubiquitin_annotations());
    let err = format_annotations(&parsed, 76, Some(&["alpha-helix", "coiled coil"][..]))
        .unwrap_err();
    assert_eq!(err, SeqViewError::KeyNotFound("coiled coil".to_string()));
}
