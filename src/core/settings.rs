use serde::{Deserialize, Serialize};

use crate::core::types::Color;
use crate::error::{ChartError, ChartResult};

/// Ring geometry and animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_max_thickness")]
    pub max_thickness: f64,
    /// Accepted for configuration compatibility; ring geometry reads `overlap_amount`.
    #[serde(default = "default_thickness_overlap")]
    pub thickness_overlap: f64,
    /// Fraction of a ring's thickness shared with its inner neighbour.
    #[serde(default = "default_overlap_amount")]
    pub overlap_amount: f64,
    /// Multiplier applied to the previous cycle's end angle when staggering rings.
    #[serde(default = "default_offset_amount")]
    pub offset_amount: f64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_radius: default_max_radius(),
            min_radius: default_min_radius(),
            max_thickness: default_max_thickness(),
            thickness_overlap: default_thickness_overlap(),
            overlap_amount: default_overlap_amount(),
            offset_amount: default_offset_amount(),
            duration_ms: default_duration_ms(),
        }
    }
}

/// Styling of the headline percentage text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageTextSettings {
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_text_color")]
    pub color: Color,
}

impl Default for PercentageTextSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            color: default_text_color(),
        }
    }
}

/// Full chart configuration.
///
/// This type is serializable so hosts can persist and reload chart setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub percentages: PercentageTextSettings,
}

impl ChartSettings {
    /// Sets the radius band rings are laid out in.
    #[must_use]
    pub fn with_radius_band(mut self, min_radius: f64, max_radius: f64) -> Self {
        self.display.min_radius = min_radius;
        self.display.max_radius = max_radius;
        self
    }

    #[must_use]
    pub fn with_max_thickness(mut self, max_thickness: f64) -> Self {
        self.display.max_thickness = max_thickness;
        self
    }

    #[must_use]
    pub fn with_thickness_overlap(mut self, thickness_overlap: f64) -> Self {
        self.display.thickness_overlap = thickness_overlap;
        self
    }

    #[must_use]
    pub fn with_overlap_amount(mut self, overlap_amount: f64) -> Self {
        self.display.overlap_amount = overlap_amount;
        self
    }

    #[must_use]
    pub fn with_offset_amount(mut self, offset_amount: f64) -> Self {
        self.display.offset_amount = offset_amount;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.display.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_percentage_text(mut self, font_size: f64, color: Color) -> Self {
        self.percentages = PercentageTextSettings { font_size, color };
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        let display = &self.display;
        for (field, value) in [
            ("max_radius", display.max_radius),
            ("min_radius", display.min_radius),
            ("max_thickness", display.max_thickness),
            ("thickness_overlap", display.thickness_overlap),
            ("overlap_amount", display.overlap_amount),
            ("offset_amount", display.offset_amount),
            ("duration_ms", display.duration_ms),
            ("font_size", self.percentages.font_size),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidSettings(format!(
                    "`{field}` must be finite"
                )));
            }
        }

        if display.max_radius <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "`max_radius` must be > 0".to_owned(),
            ));
        }
        if display.min_radius < 0.0 || display.min_radius >= display.max_radius {
            return Err(ChartError::InvalidSettings(
                "`min_radius` must be in [0, max_radius)".to_owned(),
            ));
        }
        if display.max_thickness <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "`max_thickness` must be > 0".to_owned(),
            ));
        }
        for (field, value) in [
            ("thickness_overlap", display.thickness_overlap),
            ("overlap_amount", display.overlap_amount),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidSettings(format!(
                    "`{field}` must be in [0, 1]"
                )));
            }
        }
        if display.duration_ms < 0.0 {
            return Err(ChartError::InvalidSettings(
                "`duration_ms` must be >= 0".to_owned(),
            ));
        }
        if self.percentages.font_size <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "`font_size` must be > 0".to_owned(),
            ));
        }
        self.percentages.color.validate()
    }

    /// Serializes settings to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize settings: {e}")))
    }

    /// Deserializes settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse settings: {e}")))
    }
}

fn default_max_radius() -> f64 {
    35.0
}

fn default_min_radius() -> f64 {
    20.0
}

fn default_max_thickness() -> f64 {
    15.0
}

fn default_thickness_overlap() -> f64 {
    0.3
}

fn default_overlap_amount() -> f64 {
    0.5
}

fn default_offset_amount() -> f64 {
    0.5
}

fn default_duration_ms() -> f64 {
    15_000.0
}

fn default_font_size() -> f64 {
    12.0
}

fn default_text_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}
