use serde::{Deserialize, Serialize};

/// Fonts, sizes and margins for the DOCX report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,
    /// Used for the summary block so it pastes cleanly.
    pub mono_font: String,

    /// Point sizes.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Applied to all four sides.
    pub margin_inches: f64,
}

impl DocumentStyles {
    pub fn heading_size(&self, level: u8) -> usize {
        match level {
            1 => self.heading1_size,
            2 => self.heading2_size,
            _ => self.heading3_size,
        }
    }

    /// Margin in twentieths of a point, the unit OOXML page margins use.
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            mono_font: "Courier New".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
            margin_inches: 1.0,
        }
    }
}
