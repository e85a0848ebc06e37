use crate::core::{ArcPath, Color, ElementId};
use crate::error::{ChartError, ChartResult};

/// Stroked ring arc in view-box space.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub element: ElementId,
    pub path: ArcPath,
    /// SVG path description of `path`.
    pub path_data: String,
    pub stroke_width: f64,
    pub color: Color,
}

impl ArcPrimitive {
    #[must_use]
    pub fn new(element: ElementId, path: ArcPath, stroke_width: f64, color: Color) -> Self {
        Self {
            element,
            path,
            path_data: path.to_path_data(),
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.start.is_finite() || !self.path.end.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "arc {} coordinates must be finite",
                self.element
            )));
        }
        if !self.path.radius.is_finite() || self.path.radius < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "arc {} radius must be finite and >= 0",
                self.element
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "arc {} stroke width must be finite and > 0",
                self.element
            )));
        }
        self.color.validate()
    }
}

/// Headline label, anchored on its center point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
