//! Per-element transitions between the previously drawn and the next chart state.

pub mod easing;
pub mod store;
pub mod tween;

pub use easing::{Easing, POLY_EXPONENT, TransitionTiming};
pub use store::ElementStateStore;
pub use tween::{
    ArcTween, CHART_CENTER, TextTween, animate_offset, format_percentage, tween_arc, tween_text,
};
