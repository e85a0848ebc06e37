mod chart_update;
mod engine;
mod engine_snapshot;
mod json_contract;
mod update_cycle;

pub use chart_update::{ChartUpdate, HeadlineTransition, RingTransition, timing_for_phase};
pub use engine::RadialChart;
pub use engine_snapshot::{ElementArcState, EngineSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use update_cycle::UpdateOptions;
