use crate::core::{
    ArcDescriptor, CategoryPalette, ChartModel, ChartSettings, ColorResolver, ElementId, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};
use crate::transition::ElementStateStore;

use super::ChartUpdate;

/// Update-cycle driver consumed by host applications.
///
/// `RadialChart` owns the per-element state store, runs layout and
/// transition planning on each update, and samples the scheduled
/// transitions into frames for its renderer.
pub struct RadialChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) settings: ChartSettings,
    pub(super) colors: Box<dyn ColorResolver>,
    pub(super) arc_states: ElementStateStore<ArcDescriptor>,
    pub(super) headline_state: Option<f64>,
    pub(super) last_update: Option<ChartUpdate>,
}

impl<R: Renderer> RadialChart<R> {
    pub fn new(renderer: R, viewport: Viewport, settings: ChartSettings) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        settings.validate()?;

        Ok(Self {
            renderer,
            viewport,
            settings,
            colors: Box::new(CategoryPalette::default()),
            arc_states: ElementStateStore::new(),
            headline_state: None,
            last_update: None,
        })
    }

    /// Replaces the color-resolution service used for ring labels.
    #[must_use]
    pub fn with_color_resolver(mut self, colors: impl ColorResolver + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> ChartSettings {
        self.settings
    }

    /// Transitions scheduled by the last successful update cycle.
    #[must_use]
    pub fn last_update(&self) -> Option<&ChartUpdate> {
        self.last_update.as_ref()
    }

    #[must_use]
    pub fn model(&self) -> Option<&ChartModel> {
        self.last_update.as_ref().map(|update| &update.model)
    }

    /// Descriptor `element` was last drawn with.
    #[must_use]
    pub fn arc_state(&self, element: ElementId) -> Option<&ArcDescriptor> {
        self.arc_states.get(element)
    }

    #[must_use]
    pub fn tracked_elements(&self) -> usize {
        self.arc_states.len()
    }

    #[must_use]
    pub fn headline_state(&self) -> Option<f64> {
        self.headline_state
    }

    /// Frame of the last update cycle at `elapsed_ms`; empty before the first update.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: f64) -> RenderFrame {
        self.last_update.as_ref().map_or_else(
            || RenderFrame::new(self.viewport),
            |update| update.frame_at(elapsed_ms, self.viewport),
        )
    }

    pub fn render_at(&mut self, elapsed_ms: f64) -> ChartResult<()> {
        let frame = self.frame_at(elapsed_ms);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
