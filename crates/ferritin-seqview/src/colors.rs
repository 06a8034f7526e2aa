//! Colors
//!
//! Residue color schemes and the terminal colorizer used by the sequence formatter.
//!
//! Escape sequences are produced by the [`colored`] crate; this module only decides
//! *which* color a residue gets.
use crate::error::{Result, SeqViewError};
use colored::Colorize;
use std::collections::HashMap;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One-letter protein alphabet, in the order scheme colors are listed.
pub const PROTEIN_ALPHABET: [char; 24] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y', 'B', 'Z', 'X', '*',
];

/// Colors applied on top of every scheme: non-standard residues, alignment
/// symbols, and the annotation track markers.
pub const COLOR_OVERRIDES: [(char, &str); 9] = [
    ('B', "#FFFFFF"),
    ('U', "#FFFFFF"),
    ('Z', "#FFFFFF"),
    ('O', "#FFFFFF"),
    ('.', "#FFFFFF"),
    ('-', "#FFFFFF"),
    ('|', "#FFFFFF"),
    ('_', "#000000"),
    ('✔', "#FF9900"),
];

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` or the short `#RGB` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || SeqViewError::InvalidColor(hex.to_string());
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Rgb(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = SeqViewError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

/// Named residue color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorScheme {
    /// Soft pastel palette grouped by side-chain chemistry.
    #[default]
    Flower,
    /// Clustal X coloring.
    ClustalX,
    /// Zappo: physico-chemical property groups.
    Zappo,
    /// Taylor: one hue per residue.
    Taylor,
    /// Kyte-Doolittle hydrophobicity, red (hydrophobic) to blue (hydrophilic).
    Hydrophobicity,
}

impl ColorScheme {
    /// Hex color for a residue of the protein alphabet, if the scheme defines one.
    #[rustfmt::skip]
    pub fn get_color(&self, residue: char) -> Option<&'static str> {
        let hex = match self {
            ColorScheme::Flower => match residue {
                'A' | 'V' | 'L' | 'I' | 'M' => "#B5D99C",
                'F' | 'W' | 'Y'             => "#E8B4D0",
                'K' | 'R'                   => "#8FB8DE",
                'H'                         => "#A7C7E7",
                'D' | 'E'                   => "#F4A6A6",
                'S' | 'T'                   => "#F9D89C",
                'N' | 'Q'                   => "#FBE7B5",
                'C'                         => "#F7F3A1",
                'G'                         => "#D9D9D9",
                'P'                         => "#C9B6E4",
                'B' | 'Z' | 'X' | '*'       => "#FFFFFF",
                _ => return None,
            },
            ColorScheme::ClustalX => match residue {
                'A' | 'I' | 'L' | 'M' | 'F' | 'W' | 'V' => "#80A0F0",
                'K' | 'R'                   => "#F01505",
                'E' | 'D'                   => "#C048C0",
                'N' | 'Q' | 'S' | 'T'       => "#15C015",
                'C'                         => "#F08080",
                'G'                         => "#F09048",
                'P'                         => "#C0C000",
                'H' | 'Y'                   => "#15A4A4",
                'B' | 'Z' | 'X' | '*'       => "#FFFFFF",
                _ => return None,
            },
            ColorScheme::Zappo => match residue {
                'I' | 'L' | 'V' | 'A' | 'M' => "#FFAFAF",
                'F' | 'W' | 'Y'             => "#FFC800",
                'K' | 'R' | 'H'             => "#6464FF",
                'D' | 'E'                   => "#FF0000",
                'S' | 'T' | 'N' | 'Q'       => "#00FF00",
                'P' | 'G'                   => "#FF00FF",
                'C'                         => "#FFFF00",
                'B' | 'Z' | 'X' | '*'       => "#FFFFFF",
                _ => return None,
            },
            ColorScheme::Taylor => match residue {
                'A' => "#CCFF00", 'R' => "#0000FF", 'N' => "#CC00FF", 'D' => "#FF0000",
                'C' => "#FFFF00", 'Q' => "#FF00CC", 'E' => "#FF0066", 'G' => "#FF9900",
                'H' => "#0066FF", 'I' => "#66FF00", 'L' => "#33FF00", 'K' => "#6600FF",
                'M' => "#00FF00", 'F' => "#00FF66", 'P' => "#FFCC00", 'S' => "#FF3300",
                'T' => "#FF6600", 'W' => "#00CCFF", 'Y' => "#00FFCC", 'V' => "#99FF00",
                'B' | 'Z' | 'X' | '*' => "#FFFFFF",
                _ => return None,
            },
            ColorScheme::Hydrophobicity => match residue {
                'I' => "#FF0000", 'V' => "#F60009", 'L' => "#EA0015", 'F' => "#CB0034",
                'C' => "#C2003D", 'M' => "#B0004F", 'A' => "#AD0052", 'G' => "#6A0095",
                'X' => "#680097", 'T' => "#61009E", 'S' => "#5E00A1", 'W' => "#5B00A4",
                'Y' => "#4F00B0", 'P' => "#4600B9", 'H' => "#1500EA",
                'E' | 'Z' | 'Q' | 'D' | 'B' | 'N' => "#0C00F3",
                'K' | 'R' => "#0000FF",
                '*' => "#FFFFFF",
                _ => return None,
            },
        };
        Some(hex)
    }

    /// Names of all built-in schemes.
    pub fn names() -> Vec<String> {
        ColorScheme::iter().map(|s| s.to_string()).collect()
    }
}

// Traits -------------------------------------------------------------------------------------

/// Resolves a scheme name to one color per alphabet letter.
pub trait SchemeLookup {
    fn scheme_colors(&self, scheme: &str, alphabet: &[char]) -> Result<Vec<Rgb>>;
}

/// Turns a single residue into a styled text fragment.
pub trait Colorizer {
    fn colorize(&self, residue: char, scheme: &str) -> Result<String>;

    /// One fragment per residue of `text`. Implementations that resolve the
    /// scheme per call should override this to resolve it once.
    fn colorize_each(&self, text: &str, scheme: &str) -> Result<Vec<String>> {
        text.chars().map(|res| self.colorize(res, scheme)).collect()
    }

    fn colorize_str(&self, text: &str, scheme: &str) -> Result<String> {
        Ok(self.colorize_each(text, scheme)?.concat())
    }
}

// Implementations ----------------------------------------------------------------------------

/// The schemes defined by [`ColorScheme`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinSchemes;

impl SchemeLookup for BuiltinSchemes {
    fn scheme_colors(&self, scheme: &str, alphabet: &[char]) -> Result<Vec<Rgb>> {
        let scheme = ColorScheme::from_str(scheme)
            .map_err(|_| SeqViewError::UnknownColorScheme(scheme.to_string()))?;
        alphabet
            .iter()
            .map(|&res| Rgb::from_hex(scheme.get_color(res).unwrap_or("#FFFFFF")))
            .collect()
    }
}

/// Colors residues with 24-bit ANSI foreground colors.
#[derive(Clone, Debug)]
pub struct AnsiColorizer<L = BuiltinSchemes> {
    lookup: L,
}

impl AnsiColorizer {
    /// Colorizer over the [`ColorScheme`] palettes.
    pub fn new() -> Self {
        Self {
            lookup: BuiltinSchemes,
        }
    }
}

impl Default for AnsiColorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SchemeLookup> AnsiColorizer<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Residue -> color map for a scheme, including [`COLOR_OVERRIDES`].
    pub fn color_map(&self, scheme: &str) -> Result<HashMap<char, Rgb>> {
        let colors = self.lookup.scheme_colors(scheme, &PROTEIN_ALPHABET)?;
        let mut color_map: HashMap<char, Rgb> =
            PROTEIN_ALPHABET.iter().copied().zip(colors).collect();
        for (res, hex) in COLOR_OVERRIDES {
            color_map.insert(res, Rgb::from_hex(hex)?);
        }
        Ok(color_map)
    }
}

impl<L: SchemeLookup> Colorizer for AnsiColorizer<L> {
    fn colorize(&self, residue: char, scheme: &str) -> Result<String> {
        let color_map = self.color_map(scheme)?;
        let rgb = color_map
            .get(&residue)
            .ok_or_else(|| SeqViewError::UnknownResidue {
                residue,
                scheme: scheme.to_string(),
            })?;
        Ok(paint(&residue.to_string(), *rgb))
    }

    fn colorize_each(&self, text: &str, scheme: &str) -> Result<Vec<String>> {
        let color_map = self.color_map(scheme)?;
        text.chars()
            .map(|residue| {
                color_map
                    .get(&residue)
                    .map(|rgb| paint(&residue.to_string(), *rgb))
                    .ok_or_else(|| SeqViewError::UnknownResidue {
                        residue,
                        scheme: scheme.to_string(),
                    })
            })
            .collect()
    }
}

// Helper Functions ---------------------------------------------------------------------------

fn paint(text: &str, rgb: Rgb) -> String {
    text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
}

/// Color text with a hex color.
pub fn color_text(text: &str, hex: &str) -> Result<String> {
    Ok(paint(text, Rgb::from_hex(hex)?))
}

/// Color a single residue using one of the built-in schemes.
pub fn color_amino_acid(residue: char, color_scheme_name: &str) -> Result<String> {
    AnsiColorizer::new().colorize(residue, color_scheme_name)
}

/// Color every residue of a protein sequence.
pub fn color_protein_sequence(protein_sequence: &str, color_scheme_name: &str) -> Result<String> {
    AnsiColorizer::new().colorize_str(protein_sequence, color_scheme_name)
}
