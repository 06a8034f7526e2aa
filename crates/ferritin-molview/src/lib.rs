//! # ferritin-molview
//!
//! Quick 3D views of protein structures.
//!
//! A [`StructureView`] turns PDB text into a self-contained HTML page that
//! loads [3Dmol.js](https://3dmol.org), adds the model, styles it and zooms to
//! fit. All rendering happens in the browser.
//!
//! ```no_run
//! use ferritin_molview::quick_pdb_plot;
//!
//! let pdb = std::fs::read_to_string("1ubq.pdb").unwrap();
//! let html = quick_pdb_plot(&pdb, 800, 600, "#007FAA").unwrap();
//! std::fs::write("1ubq.html", html).unwrap();
//! ```
use bon::Builder;
use ferritin_seqview::Rgb;
use log::debug;
use serde::Serialize;
use serde_json::{json, Map, Value};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Script loaded by the generated page.
pub const VIEWER_SCRIPT_URL: &str = "https://3Dmol.org/build/3Dmol-min.js";

#[derive(Debug, Error)]
pub enum MolViewError {
    #[error("Invalid view options: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("No ATOM or HETATM records in structure")]
    EmptyStructure,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MolViewError>;

/// 3Dmol.js style names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[default]
    Cartoon,
    Stick,
    Sphere,
    Line,
}

fn validate_hex(color: &str) -> std::result::Result<(), ValidationError> {
    Rgb::from_hex(color)
        .map(|_| ())
        .map_err(|_| ValidationError::new("hex_color"))
}

/// Viewer options.
#[derive(Builder, Clone, Debug, Serialize, Validate)]
pub struct StructureView {
    #[builder(default = 800)]
    #[validate(range(min = 1, max = 10000))]
    width: u32,
    #[builder(default = 600)]
    #[validate(range(min = 1, max = 10000))]
    height: u32,
    #[builder(into, default = String::from("#007FAA"))]
    #[validate(custom(function = "validate_hex"))]
    color: String,
    #[builder(default)]
    style: Representation,
}

impl Default for StructureView {
    fn default() -> Self {
        StructureView::builder().build()
    }
}

fn count_atoms(pdb_str: &str) -> usize {
    pdb_str
        .lines()
        .filter(|line| line.starts_with("ATOM") || line.starts_with("HETATM"))
        .count()
}

/// Encode text as a JS string literal that is also safe inside `<script>`.
fn js_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?.replace("</", "<\\/"))
}

impl StructureView {
    /// The 3Dmol.js style object, e.g. `{"cartoon": {"color": "#007FAA"}}`.
    pub fn style_spec(&self) -> Value {
        let mut style = Map::new();
        style.insert(self.style.to_string(), json!({ "color": self.color }));
        Value::Object(style)
    }

    /// Scene description of the calls the page makes, in order.
    pub fn view_spec(&self) -> Result<Value> {
        self.validate()?;
        Ok(json!({
            "width": self.width,
            "height": self.height,
            "model": { "format": "pdb" },
            "style": self.style_spec(),
            "zoomTo": true,
        }))
    }

    /// Build the HTML page for a PDB structure.
    pub fn to_html(&self, pdb_str: &str) -> Result<String> {
        self.validate()?;
        let n_atoms = count_atoms(pdb_str);
        if n_atoms == 0 {
            return Err(MolViewError::EmptyStructure);
        }
        debug!("Building viewer page for {} atoms", n_atoms);

        let model = js_string(pdb_str)?;
        let style = serde_json::to_string(&self.style_spec())?;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<script src="{script}"></script>
</head>
<body>
<div id="viewer" style="width: {width}px; height: {height}px; position: relative;"></div>
<script>
let viewer = $3Dmol.createViewer(document.getElementById("viewer"), {{ backgroundColor: "white" }});
viewer.addModel({model}, "pdb");
viewer.setStyle({{}}, {style});
viewer.zoomTo();
viewer.render();
</script>
</body>
</html>
"#,
            script = VIEWER_SCRIPT_URL,
            width = self.width,
            height = self.height,
        ))
    }
}

/// Render a PDB structure as a cartoon in a single color.
pub fn quick_pdb_plot(pdb_str: &str, width: u32, height: u32, color: &str) -> Result<String> {
    StructureView::builder()
        .width(width)
        .height(height)
        .color(color)
        .build()
        .to_html(pdb_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDB: &str = "ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N\nEND\n";

    #[test]
    fn test_defaults() {
        let spec = StructureView::default().view_spec().unwrap();
        assert_eq!(spec["width"], 800);
        assert_eq!(spec["height"], 600);
        assert_eq!(spec["style"]["cartoon"]["color"], "#007FAA");
    }

    #[test]
    fn test_style_spec() {
        let view = StructureView::builder()
            .style(Representation::Stick)
            .color("#FF9900")
            .build();
        assert_eq!(view.style_spec(), json!({"stick": {"color": "#FF9900"}}));
    }

    #[test]
    fn test_html_contains_calls() {
        let html = quick_pdb_plot(PDB, 400, 300, "#007FAA").unwrap();
        assert!(html.contains(VIEWER_SCRIPT_URL));
        assert!(html.contains("width: 400px; height: 300px"));
        assert!(html.contains("viewer.addModel(\"ATOM"));
        assert!(html.contains(r##"viewer.setStyle({}, {"cartoon":{"color":"#007FAA"}});"##));
        assert!(html.contains("viewer.zoomTo();"));
    }

    #[test]
    fn test_script_close_is_escaped() {
        let pdb = format!("{PDB}REMARK </script>\n");
        let html = quick_pdb_plot(&pdb, 400, 300, "#007FAA").unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_invalid_options() {
        assert!(matches!(
            quick_pdb_plot(PDB, 0, 300, "#007FAA"),
            Err(MolViewError::Validation(_))
        ));
        assert!(matches!(
            quick_pdb_plot(PDB, 400, 300, "teal"),
            Err(MolViewError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_structure() {
        assert!(matches!(
            quick_pdb_plot("HEADER\nEND\n", 400, 300, "#007FAA"),
            Err(MolViewError::EmptyStructure)
        ));
    }
}
