//! radial-progress: concentric-ring progress chart geometry and transitions.
//!
//! Layout turns a table of percentages into ring descriptors, the transition
//! engine interpolates each ring between its previously drawn and its next
//! state, and the `api` driver samples those transitions into
//! backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod transition;

pub use api::{RadialChart, UpdateOptions};
pub use error::{ChartError, ChartResult};
