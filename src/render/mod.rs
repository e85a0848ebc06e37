mod frame;
mod null_renderer;
mod primitives;

pub use frame::{RenderFrame, VIEW_BOX_SIZE};
pub use null_renderer::NullRenderer;
pub use primitives::{ArcPrimitive, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully sampled, deterministic `RenderFrame`, so
/// painting stays isolated from layout and transition logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
