use tracing::warn;

use crate::core::{
    ArcDescriptor, ArcPath, ArcTransitionPair, ChartModel, Color, ElementId, TransitionPhase,
    Viewport,
};
use crate::render::{ArcPrimitive, RenderFrame, TextPrimitive};
use crate::transition::{
    ArcTween, CHART_CENTER, Easing, TextTween, TransitionTiming, tween_arc, tween_text,
};

/// Timing of a transition in `phase` for a configured duration.
///
/// Entering and exiting elements ease in polynomially; exits take half the
/// duration. Updating elements bounce into place.
#[must_use]
pub fn timing_for_phase(phase: TransitionPhase, duration_ms: f64) -> TransitionTiming {
    match phase {
        TransitionPhase::Enter => TransitionTiming::new(duration_ms, Easing::PolyIn),
        TransitionPhase::Update => TransitionTiming::new(duration_ms, Easing::BounceOut),
        TransitionPhase::Exit => TransitionTiming::new(duration_ms / 2.0, Easing::PolyIn),
    }
}

/// Scheduled transition of one ring element.
#[derive(Debug, Clone, PartialEq)]
pub struct RingTransition {
    pub element: ElementId,
    pub phase: TransitionPhase,
    pub pair: ArcTransitionPair,
    pub tween: ArcTween,
    pub timing: TransitionTiming,
    pub stroke_width: f64,
    pub color: Color,
}

impl RingTransition {
    /// Returns `None` when neither side of `pair` is present.
    #[must_use]
    pub fn new(element: ElementId, pair: ArcTransitionPair, duration_ms: f64) -> Option<Self> {
        let phase = pair.phase()?;
        let styled: &ArcDescriptor = pair.next.as_ref().or(pair.previous.as_ref())?;
        Some(Self {
            element,
            phase,
            tween: tween_arc(pair.previous.as_ref(), pair.next.as_ref(), element),
            timing: timing_for_phase(phase, duration_ms),
            stroke_width: styled.thickness,
            color: styled.color,
            pair,
        })
    }

    /// Exiting rings are discarded once their transition completes.
    #[must_use]
    pub fn is_visible_at(&self, elapsed_ms: f64) -> bool {
        self.phase != TransitionPhase::Exit || !self.timing.is_finished(elapsed_ms)
    }

    /// Ring primitive at `elapsed_ms`. Degenerate geometry collapses onto the center.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> ArcPrimitive {
        let t = self.timing.progress(elapsed_ms);
        let path = self.tween.sample(t).unwrap_or_else(|err| {
            warn!(
                element = %self.element,
                t,
                error = %err,
                "drawing degenerate ring collapsed"
            );
            ArcPath::collapsed(CHART_CENTER)
        });
        ArcPrimitive::new(self.element, path, self.stroke_width, self.color)
    }
}

/// Scheduled transition of the headline text.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineTransition {
    pub phase: TransitionPhase,
    pub previous: Option<f64>,
    pub next: Option<f64>,
    pub tween: TextTween,
    pub timing: TransitionTiming,
}

impl HeadlineTransition {
    /// Returns `None` when there is no headline on either side.
    #[must_use]
    pub fn new(previous: Option<f64>, next: Option<f64>, duration_ms: f64) -> Option<Self> {
        let phase = match (previous.is_some(), next.is_some()) {
            (true, true) => TransitionPhase::Update,
            (false, true) => TransitionPhase::Enter,
            (true, false) => TransitionPhase::Exit,
            (false, false) => return None,
        };
        Some(Self {
            phase,
            previous,
            next,
            tween: tween_text(previous, next),
            timing: timing_for_phase(phase, duration_ms),
        })
    }

    #[must_use]
    pub fn is_visible_at(&self, elapsed_ms: f64) -> bool {
        self.phase != TransitionPhase::Exit || !self.timing.is_finished(elapsed_ms)
    }

    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> String {
        self.tween.sample(self.timing.progress(elapsed_ms))
    }
}

/// Everything one update cycle scheduled.
///
/// `model` is the untouched layout output; the descriptors in each ring's
/// `pair.next` carry the rotational `adjust` applied by the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub model: ChartModel,
    pub rings: Vec<RingTransition>,
    pub headline: Option<HeadlineTransition>,
}

impl ChartUpdate {
    pub fn rings_in_phase(&self, phase: TransitionPhase) -> impl Iterator<Item = &RingTransition> {
        self.rings.iter().filter(move |ring| ring.phase == phase)
    }

    /// Time after which no transition of this cycle changes any more.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.rings
            .iter()
            .map(|ring| ring.timing.duration_ms)
            .chain(self.headline.iter().map(|headline| headline.timing.duration_ms))
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn is_settled(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms()
    }

    /// Samples every transition at `elapsed_ms` into a frame.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: f64, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        for ring in &self.rings {
            if ring.is_visible_at(elapsed_ms) {
                frame.arcs.push(ring.sample(elapsed_ms));
            }
        }

        if let Some(headline) = self
            .headline
            .as_ref()
            .filter(|headline| headline.is_visible_at(elapsed_ms))
        {
            let style = self.model.settings.percentages;
            frame.texts.push(TextPrimitive::new(
                headline.sample(elapsed_ms),
                CHART_CENTER,
                CHART_CENTER,
                style.font_size,
                style.color,
            ));
        }
        frame
    }
}
