pub mod layout;
pub mod palette;
pub mod primitives;
pub mod settings;
pub mod table;
pub mod trig;
pub mod types;

pub use layout::{ChartModel, ring_thickness, visual_transform};
pub use palette::{CategoryPalette, ColorResolver};
pub use settings::{ChartSettings, DisplaySettings, PercentageTextSettings};
pub use table::{CellValue, DataTable, LABEL_ROLE, PERCENTAGE_ROLE, TableColumn};
pub use trig::{
    ArcPath, PI2, ZERO_ANGLE_EPSILON, angle_from_percentage, build_arc_path, normalize_angle,
};
pub use types::{
    ArcDescriptor, ArcTransitionPair, Color, ElementId, Point, TransitionPhase, Viewport,
};
