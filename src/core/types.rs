use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in view-box coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians on the circle of `radius` around `(center, center)`.
    #[must_use]
    pub fn on_circle(center: f64, radius: f64, angle: f64) -> Self {
        Self {
            x: center + radius * angle.cos(),
            y: center + radius * angle.sin(),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be a 6-digit hex token"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{input}` contains non-hex digits"))
            })
        };
        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as a `#rrggbb` token, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_u8 = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stable identity of one rendered element: its position in the bound selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl ElementId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendered parameters of one concentric ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    /// Sweep angle in radians.
    pub angular_span: f64,
    /// Start angle in radians, cumulative over the rings before this one.
    pub angular_offset: f64,
    /// Extra rotation applied by the update driver to stagger successive cycles.
    pub adjust: f64,
    pub color: Color,
    pub radius: f64,
    pub thickness: f64,
}

impl ArcDescriptor {
    /// Offset the ring is actually drawn at.
    #[must_use]
    pub fn effective_offset(&self) -> f64 {
        self.adjust + self.angular_offset
    }

    /// Angle at which the ring ends, ignoring `adjust`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.angular_span + self.angular_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPhase {
    /// Element is created and animates in from nothing.
    Enter,
    /// Element persists and animates between two descriptors.
    Update,
    /// Element is removed and animates out before being discarded.
    Exit,
}

/// Previous and next descriptors of one ring element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcTransitionPair {
    pub previous: Option<ArcDescriptor>,
    pub next: Option<ArcDescriptor>,
}

impl ArcTransitionPair {
    #[must_use]
    pub fn new(previous: Option<ArcDescriptor>, next: Option<ArcDescriptor>) -> Self {
        Self { previous, next }
    }

    /// Returns `None` when both sides are absent.
    #[must_use]
    pub fn phase(&self) -> Option<TransitionPhase> {
        match (self.previous.is_some(), self.next.is_some()) {
            (true, true) => Some(TransitionPhase::Update),
            (false, true) => Some(TransitionPhase::Enter),
            (true, false) => Some(TransitionPhase::Exit),
            (false, false) => None,
        }
    }
}
