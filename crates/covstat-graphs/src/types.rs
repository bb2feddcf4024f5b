//! Chart styling shared by every renderer.

use serde::{Deserialize, Serialize};

/// Font settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: u32,
}

impl FontConfig {
    fn sized(size: u32) -> Self {
        Self {
            family: "sans-serif".to_string(),
            size,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::sized(18)
    }
}

/// Image size, colors, and fonts for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Hex color of the staff bars
    pub staff_color: String,
    /// Hex color of the student bars
    pub student_color: String,
    /// Hex background color
    pub background_color: String,
    /// Chart title font
    pub title_font: FontConfig,
    /// Axis descriptions and tick labels
    pub axis_font: FontConfig,
    /// Value annotations
    pub label_font: FontConfig,
    /// Outer margin in pixels
    pub margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1000,
            staff_color: "#1f77b4".to_string(),
            student_color: "#ff7f0e".to_string(),
            background_color: "#ffffff".to_string(),
            title_font: FontConfig::sized(32),
            axis_font: FontConfig::default(),
            label_font: FontConfig::sized(14),
            margin: 20,
        }
    }
}

impl ChartStyle {
    /// Default fonts with the given size and bar colors.
    pub fn new(width: u32, height: u32, staff_color: impl Into<String>, student_color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            staff_color: staff_color.into(),
            student_color: student_color.into(),
            ..Self::default()
        }
    }

    /// `(width, height)` as plotters expects it.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
