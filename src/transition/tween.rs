use crate::core::trig::{ArcPath, PI2, build_arc_path, normalize_angle};
use crate::core::types::{ArcDescriptor, ElementId};
use crate::error::ChartResult;

/// Center of the 100×100 view box every ring is drawn in.
pub const CHART_CENTER: f64 = 50.0;

/// Radius used when neither side of a transition carries one.
const FALLBACK_RADIUS: f64 = 1.0;

/// Offset at time `t`, with `revolutions` extra full turns added on the way.
#[must_use]
pub fn animate_offset(t: f64, starting_offset: f64, ending_offset: f64, revolutions: usize) -> f64 {
    let total = (ending_offset - starting_offset) + revolutions as f64 * PI2;
    starting_offset + total * t
}

/// Formats a fraction as a percentage with one decimal, `0.503` -> `50.3%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
enum ArcTweenKind {
    Constant(ChartResult<ArcPath>),
    Animated {
        starting_offset: f64,
        ending_offset: f64,
        starting_angle: f64,
        ending_angle: f64,
        revolutions: usize,
    },
}

/// Time-parameterized path of one ring between two states.
///
/// Sampling is a pure read of the captured start and end state.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcTween {
    radius: f64,
    kind: ArcTweenKind,
}

impl ArcTween {
    /// Path to draw at normalized time `t`.
    ///
    /// From `t = 1` on, the path is exactly the one of the ending state.
    pub fn sample(&self, t: f64) -> ChartResult<ArcPath> {
        match &self.kind {
            ArcTweenKind::Constant(path) => path.clone(),
            ArcTweenKind::Animated {
                starting_offset,
                ending_offset,
                starting_angle,
                ending_angle,
                revolutions,
            } => {
                if t >= 1.0 {
                    return build_arc_path(CHART_CENTER, *ending_offset, self.radius, *ending_angle);
                }
                let offset = animate_offset(t, *starting_offset, *ending_offset, *revolutions);
                let angle = starting_angle + t * (ending_angle - starting_angle);
                build_arc_path(CHART_CENTER, offset, self.radius, angle)
            }
        }
    }

    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self.kind, ArcTweenKind::Constant(_))
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Builds the transition of `element` from `previous` to `next`.
///
/// An absent side stands for the empty ring at offset `0`, so creation
/// animates in from nothing and removal animates out to nothing. Rings spin
/// `element + 1` extra turns while moving.
#[must_use]
pub fn tween_arc(
    previous: Option<&ArcDescriptor>,
    next: Option<&ArcDescriptor>,
    element: ElementId,
) -> ArcTween {
    let starting_offset = normalize_angle(previous.map_or(0.0, ArcDescriptor::effective_offset));
    let ending_offset = normalize_angle(next.map_or(0.0, ArcDescriptor::effective_offset));
    let starting_angle = previous.map_or(0.0, |descriptor| descriptor.angular_span);
    let ending_angle = next.map_or(0.0, |descriptor| descriptor.angular_span);
    let radius = previous
        .or(next)
        .map_or(FALLBACK_RADIUS, |descriptor| descriptor.radius);

    let has_changes = starting_offset != ending_offset || starting_angle != ending_angle;
    let kind = if has_changes {
        ArcTweenKind::Animated {
            starting_offset,
            ending_offset,
            starting_angle,
            ending_angle,
            revolutions: element.index() + 1,
        }
    } else {
        ArcTweenKind::Constant(build_arc_path(
            CHART_CENTER,
            starting_offset,
            radius,
            ending_angle,
        ))
    };

    ArcTween { radius, kind }
}

#[derive(Debug, Clone, PartialEq)]
enum TextTweenKind {
    Constant { value: f64, text: String },
    Animated { starting: f64, ending: f64 },
}

/// Time-parameterized headline text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTween {
    kind: TextTweenKind,
}

impl TextTween {
    /// Numeric value shown at normalized time `t`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        match self.kind {
            TextTweenKind::Constant { value, .. } => value,
            TextTweenKind::Animated { starting, ending } => starting + t * (ending - starting),
        }
    }

    #[must_use]
    pub fn sample(&self, t: f64) -> String {
        match &self.kind {
            TextTweenKind::Constant { text, .. } => text.clone(),
            TextTweenKind::Animated { .. } => format_percentage(self.value_at(t)),
        }
    }

    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self.kind, TextTweenKind::Constant { .. })
    }
}

/// Builds the headline transition; absent values count as `0`.
#[must_use]
pub fn tween_text(previous: Option<f64>, next: Option<f64>) -> TextTween {
    let starting = previous.unwrap_or(0.0);
    let ending = next.unwrap_or(0.0);
    let kind = if starting == ending {
        TextTweenKind::Constant {
            value: ending,
            text: format_percentage(ending),
        }
    } else {
        TextTweenKind::Animated { starting, ending }
    };
    TextTween { kind }
}
