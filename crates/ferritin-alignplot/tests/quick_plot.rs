use bio::io::fasta;
use ferritin_alignplot::quick_alignment_plot;
use ferritin_test_data::TestFile;

fn read_pair() -> (String, String) {
    let (path, _tmp) = TestFile::ubiquitin_pair_fasta().create_temp().unwrap();
    let records: Vec<fasta::Record> = fasta::Reader::from_file(path)
        .unwrap()
        .records()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records[0].id(), "reference");
    assert_eq!(records[1].id(), "prediction");
    let seq = |r: &fasta::Record| String::from_utf8(r.seq().to_vec()).unwrap();
    (seq(&records[0]), seq(&records[1]))
}

#[test]
fn test_ubiquitin_point_mutants() {
    let (reference, prediction) = read_pair();
    let (alignment, document) = quick_alignment_plot(&reference, &prediction).unwrap();

    // two substitutions, no gaps
    assert_eq!(alignment.len(), 76);
    assert!((alignment.identity() - 74.0 / 76.0).abs() < 1e-9);

    let tmp = tempfile::NamedTempFile::new().unwrap();
    svg::save(tmp.path(), &document).unwrap();
    let written = std::fs::read_to_string(tmp.path()).unwrap();
    assert!(written.contains("Prediction"));
    // 76 columns at 50 per line
    assert_eq!(written.matches("alignment-line").count(), 2);
}
