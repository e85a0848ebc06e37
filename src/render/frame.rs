use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, TextPrimitive};

/// Side length of the square view box primitives are expressed in.
pub const VIEW_BOX_SIZE: f64 = 100.0;

/// Backend-agnostic scene for one sampled instant of a chart transition.
///
/// Primitives live in a `VIEW_BOX_SIZE` square view box; backends scale it
/// into `viewport` preserving aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub arcs: Vec<ArcPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arcs: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for arc in &self.arcs {
            arc.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty() && self.texts.is_empty()
    }
}
