use serde::{Deserialize, Serialize};

use crate::core::{ArcDescriptor, ChartSettings, ElementId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::transition::ElementStateStore;

use super::RadialChart;

/// Descriptor one element was last drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementArcState {
    pub element: ElementId,
    pub descriptor: ArcDescriptor,
}

/// Serializable state carried between update cycles, used by regression
/// tests and hosts that persist chart state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub settings: ChartSettings,
    pub elements: Vec<ElementArcState>,
    pub headline_value: Option<f64>,
}

impl<R: Renderer> RadialChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            settings: self.settings,
            elements: self
                .arc_states
                .sorted_entries()
                .into_iter()
                .map(|(element, descriptor)| ElementArcState {
                    element,
                    descriptor: *descriptor,
                })
                .collect(),
            headline_value: self.headline_state,
        }
    }

    /// Restores stored element state so the next update animates from it.
    ///
    /// Scheduled transitions of the current cycle are dropped.
    pub fn restore_snapshot(&mut self, snapshot: EngineSnapshot) -> ChartResult<()> {
        if !snapshot.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: snapshot.viewport.width,
                height: snapshot.viewport.height,
            });
        }
        snapshot.settings.validate()?;

        self.viewport = snapshot.viewport;
        self.settings = snapshot.settings;
        self.arc_states = snapshot
            .elements
            .into_iter()
            .map(|state| (state.element, state.descriptor))
            .collect::<ElementStateStore<_>>();
        self.headline_state = snapshot.headline_value;
        self.last_update = None;
        Ok(())
    }
}
