use ferritin_molview::{Representation, StructureView};
use ferritin_test_data::TestFile;

#[test]
fn test_ubiquitin_page() {
    let (pdb_file, _temp) = TestFile::ubiquitin_pdb().create_temp().unwrap();
    let pdb = std::fs::read_to_string(pdb_file).unwrap();

    let html = StructureView::builder()
        .style(Representation::Sphere)
        .build()
        .to_html(&pdb)
        .unwrap();

    // PDB lines are kept, newline-escaped, inside a single JS string
    assert!(html.contains(r"ATOM      1  N   MET A   1"));
    assert!(html.contains(r"\nATOM      2  CA  MET A   1"));
    assert!(html.contains(r##"{"sphere":{"color":"#007FAA"}}"##));
    assert!(html.contains("width: 800px; height: 600px"));
}
