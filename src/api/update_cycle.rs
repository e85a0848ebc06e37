use tracing::{debug, error, trace};

use crate::core::{
    ArcDescriptor, ArcTransitionPair, ChartModel, ChartSettings, DataTable, ElementId,
    TransitionPhase, Viewport, visual_transform,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::transition::ElementStateStore;

use super::{ChartUpdate, HeadlineTransition, RadialChart, RingTransition};

/// Input of one update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOptions {
    pub viewport: Viewport,
    pub table: Option<DataTable>,
    /// `None` keeps the settings of the previous cycle.
    pub settings: Option<ChartSettings>,
}

impl UpdateOptions {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            table: None,
            settings: None,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.table = Some(table);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl<R: Renderer> RadialChart<R> {
    /// Runs one update cycle.
    ///
    /// A failing cycle is logged and aborted: stored element state and the
    /// previously scheduled transitions stay in place. Returns whether the
    /// cycle was applied.
    pub fn update(&mut self, options: UpdateOptions) -> bool {
        match self.try_update(options) {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "update cycle aborted, keeping previous state");
                false
            }
        }
    }

    /// Runs one update cycle and reports failures to the caller.
    pub fn try_update(&mut self, options: UpdateOptions) -> ChartResult<()> {
        if !options.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: options.viewport.width,
                height: options.viewport.height,
            });
        }

        let settings = options.settings.unwrap_or(self.settings);
        let model = visual_transform(options.table.as_ref(), &settings, self.colors.as_mut())?;
        let (update, arc_states) = plan_update(model, &self.arc_states, self.headline_state);

        debug!(
            rings = update.model.rings.len(),
            exiting = update.rings_in_phase(TransitionPhase::Exit).count(),
            headline = ?update.model.headline_value,
            "update cycle planned"
        );

        self.viewport = options.viewport;
        self.settings = settings;
        self.arc_states = arc_states;
        self.headline_state = update.model.headline_value;
        self.last_update = Some(update);
        Ok(())
    }
}

/// Pairs every ring of `model` with the state its element was last drawn
/// with and schedules enter, update and exit transitions.
///
/// Rings are staggered by `adjust = total_offset × offset_amount`, where
/// `total_offset` is the end angle of the last ring drawn by the previous
/// cycle. Returns the schedule and the element states to keep for the next
/// cycle; exiting elements are not carried over.
pub(super) fn plan_update(
    model: ChartModel,
    arc_states: &ElementStateStore<ArcDescriptor>,
    headline_state: Option<f64>,
) -> (ChartUpdate, ElementStateStore<ArcDescriptor>) {
    let display = model.settings.display;
    let total_offset = arc_states
        .last()
        .map_or(0.0, |(_, descriptor)| descriptor.end_angle());
    let adjust = total_offset * display.offset_amount;

    let mut next_states = ElementStateStore::new();
    let mut rings = Vec::with_capacity(model.rings.len().max(arc_states.len()));

    for (index, ring) in model.rings.iter().enumerate() {
        let element = ElementId(index);
        let next = ArcDescriptor { adjust, ..*ring };
        let previous = arc_states.get(element).copied();
        trace!(%element, entering = previous.is_none(), "join ring");

        rings.extend(RingTransition::new(
            element,
            ArcTransitionPair::new(previous, Some(next)),
            display.duration_ms,
        ));
        next_states.set(element, Some(next));
    }

    for (element, previous) in arc_states.sorted_entries() {
        if element.index() < model.rings.len() {
            continue;
        }
        trace!(%element, "ring exits");
        rings.extend(RingTransition::new(
            element,
            ArcTransitionPair::new(Some(*previous), None),
            display.duration_ms,
        ));
    }

    let headline = HeadlineTransition::new(
        headline_state,
        model.headline_value,
        display.duration_ms,
    );

    (
        ChartUpdate {
            model,
            rings,
            headline,
        },
        next_states,
    )
}
