//! ferritin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Small sequence, annotation and structure fixtures are included in the crate
//! distribution as reference files.
//!
//! The test files are represented as `TestFile` objects which package the raw
//! binary data and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (fasta_file, _temp) = TestFile::ubiquitin_fasta().create_temp().unwrap();
/// let (pdb_file, _temp) = TestFile::ubiquitin_pdb().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Human ubiquitin (P0CG48, first repeat), 76 residues.
    pub fn ubiquitin_fasta() -> Self {
        Self {
            filebinary: include_bytes!("../data/sequences/ubiquitin.fasta"),
            suffix: "fasta",
        }
    }
    /// Two records: `reference` (ubiquitin) and `prediction` (P19A, S57A).
    pub fn ubiquitin_pair_fasta() -> Self {
        Self {
            filebinary: include_bytes!("../data/sequences/ubiquitin_pair.fasta"),
            suffix: "fasta",
        }
    }
    /// Secondary structure and ubiquitination-site annotations for ubiquitin,
    /// as a JSON array of `{start, end, label}`.
    pub fn ubiquitin_annotations() -> Self {
        Self {
            filebinary: include_bytes!("../data/annotations/ubiquitin.json"),
            suffix: "json",
        }
    }
    /// 1UBQ residues 1-4, backbone atoms only.
    pub fn ubiquitin_pdb() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/ubiquitin_fragment.pdb"),
            suffix: "pdb",
        }
    }

    /// The embedded file as text.
    pub fn as_str(&self) -> &'static str {
        std::str::from_utf8(self.filebinary).unwrap_or_default()
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp() {
        let (path, _handle) = TestFile::ubiquitin_pdb().create_temp().unwrap();
        assert!(path.ends_with(".pdb"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("HEADER"));
    }

    #[test]
    fn test_as_str() {
        assert!(TestFile::ubiquitin_annotations().as_str().contains("beta-strand"));
    }
}
