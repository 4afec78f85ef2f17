//! Color table configuration for composite rendering.
//!
//! An ordered [`ColorMap`] assigns one RGB color to each composite pixel
//! value: entry *i* colors pixels of value *i + 1* (value 0 stays the
//! background). Tables persist as JSON files alongside the grid definition.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::image::Rgb;

/// One RGB entry of a diagram color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rrggbb` hex notation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { red, green, blue })
    }

    pub fn rgb(&self) -> Rgb {
        [self.red, self.green, self.blue]
    }
}

/// Ordered color table: entry *i* colors composite pixel value *i + 1*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap {
    pub cmap: Vec<Color>,
}

impl ColorMap {
    pub fn new(cmap: Vec<Color>) -> Self {
        Self { cmap }
    }

    pub fn len(&self) -> usize {
        self.cmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmap.is_empty()
    }

    /// Load a color table from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<ColorMap> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read color map {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid color map JSON in {}", path.display()))
    }

    /// Persist the color table as pretty JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize color map".to_string())?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write color map {}", path.display()))
    }
}

impl Default for ColorMap {
    /// Primary-color table for up to three sources/overlap values.
    fn default() -> Self {
        Self::new(vec![
            Color::new(0xFF, 0x00, 0x00),
            Color::new(0x00, 0xFF, 0x00),
            Color::new(0x00, 0x00, 0xFF),
        ])
    }
}
