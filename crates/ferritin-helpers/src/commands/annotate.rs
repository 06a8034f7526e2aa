use crate::cli::{LayoutArgs, SequenceInput};
use anyhow::{Context, Result};
use ferritin_seqview::{
    format_annotations, parse_annotations_by_index, parse_annotations_by_label, Annotation,
    AnsiColorizer,
};
use log::debug;
use std::fs;

fn read_annotations(path: &str) -> Result<Vec<Annotation>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read annotations {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid annotation JSON in {path}"))
}

pub fn execute(
    input: SequenceInput,
    annotations: String,
    filter: Vec<String>,
    json: bool,
    by_index: bool,
    layout: LayoutArgs,
) -> Result<()> {
    let sequence = input.read()?;
    let length = sequence.chars().count();
    let annotations = read_annotations(&annotations)?;
    debug!("Loaded {} annotations", annotations.len());

    if by_index {
        let by_position = parse_annotations_by_index(&annotations, length);
        println!("{}", serde_json::to_string_pretty(&by_position)?);
        return Ok(());
    }

    let parsed = parse_annotations_by_label(&annotations);
    let filter: Vec<&str> = filter.iter().map(String::as_str).collect();
    let tracks = format_annotations(&parsed, length, Some(filter.as_slice()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
        return Ok(());
    }

    let format = layout.to_format();
    let colorizer = AnsiColorizer::new();
    println!("{}", format.format(&sequence, &colorizer)?);
    for (label, track) in &tracks {
        println!();
        println!("{label}");
        println!("{}", format.format(track, &colorizer)?);
    }
    Ok(())
}
