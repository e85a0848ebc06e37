use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::Point;
use crate::error::{ChartError, ChartResult};

/// One full turn in radians.
pub const PI2: f64 = 2.0 * PI;

/// Span substituted for a zero-length arc so it still renders as a visible point.
pub const ZERO_ANGLE_EPSILON: f64 = 0.0005;

/// Folds `angle` into `(-2π, 2π)`, keeping its sign.
///
/// Non-finite input yields `NaN`; `build_arc_path` reports it as degenerate.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    angle % PI2
}

/// Converts a fraction of a full turn into radians. Values are not clamped.
#[must_use]
pub fn angle_from_percentage(percentage: f64) -> f64 {
    PI2 * percentage
}

/// Circular arc segment ready to be written as an SVG path description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl ArcPath {
    /// Zero-radius arc sitting on the center, used in place of degenerate geometry.
    #[must_use]
    pub fn collapsed(center: f64) -> Self {
        let point = Point::new(center, center);
        Self {
            start: point,
            end: point,
            radius: 0.0,
            large_arc: false,
            sweep: true,
        }
    }

    #[must_use]
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y
        )
    }
}

/// Builds the arc of `radius` around `(center, center)` starting at `offset`
/// and spanning `angle` radians.
///
/// The sweep flag always selects the positive direction, so a negative span
/// is drawn as the complementary `2π + angle` of the circle; the large-arc
/// flag is chosen accordingly.
pub fn build_arc_path(center: f64, offset: f64, radius: f64, angle: f64) -> ChartResult<ArcPath> {
    let degenerate = || {
        warn!(center, offset, radius, angle, "degenerate arc geometry");
        ChartError::DegenerateGeometry {
            center,
            offset,
            radius,
            angle,
        }
    };

    if !center.is_finite() || !offset.is_finite() || !radius.is_finite() || !angle.is_finite() {
        return Err(degenerate());
    }

    let mut angle = normalize_angle(angle);
    if angle == 0.0 {
        angle = ZERO_ANGLE_EPSILON;
    }

    let start = Point::on_circle(center, radius, offset);
    let end = Point::on_circle(center, radius, angle + offset);
    if !start.is_finite() || !end.is_finite() {
        return Err(degenerate());
    }

    Ok(ArcPath {
        start,
        end,
        radius,
        large_arc: large_arc_flag(angle),
        sweep: true,
    })
}

fn large_arc_flag(angle: f64) -> bool {
    if angle < -PI {
        false
    } else if angle < 0.0 {
        true
    } else {
        angle >= PI
    }
}
