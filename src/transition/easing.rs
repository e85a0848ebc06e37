//! Easing curves applied to elapsed-time fractions before tweens are sampled.

use serde::{Deserialize, Serialize};

/// Exponent of the polynomial ease.
pub const POLY_EXPONENT: f64 = 3.0;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Identity mapping.
    #[default]
    Linear,
    /// Polynomial ease-in, `t^3`. Used for rings entering and leaving.
    PolyIn,
    /// Bounce ease-out. Used for rings moving between two states.
    BounceOut,
}

impl Easing {
    /// Applies the easing function to a fraction in `[0, 1]`.
    ///
    /// Input is clamped and `NaN` reads as `0`; both ends map exactly onto
    /// `0` and `1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => t,
            Self::PolyIn => t.powf(POLY_EXPONENT),
            Self::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    const B1: f64 = 4.0 / 11.0;
    const B2: f64 = 6.0 / 11.0;
    const B3: f64 = 8.0 / 11.0;
    const B4: f64 = 3.0 / 4.0;
    const B5: f64 = 9.0 / 11.0;
    const B6: f64 = 10.0 / 11.0;
    const B7: f64 = 15.0 / 16.0;
    const B8: f64 = 21.0 / 22.0;
    const B9: f64 = 63.0 / 64.0;
    const B0: f64 = 1.0 / B1 / B1;

    if t < B1 {
        B0 * t * t
    } else if t < B3 {
        let t = t - B2;
        B0 * t * t + B4
    } else if t < B6 {
        let t = t - B5;
        B0 * t * t + B7
    } else {
        let t = t - B8;
        B0 * t * t + B9
    }
}

/// Duration and easing of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl TransitionTiming {
    #[must_use]
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Eased fraction of the transition completed after `elapsed_ms`.
    ///
    /// Zero-length transitions are complete immediately.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply(elapsed_ms / self.duration_ms)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
