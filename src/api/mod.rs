mod axis_label_resolver;
mod axis_stack_label_resolver;
mod engine;
mod engine_config;
mod json_contract;
mod marker_resolver;
mod rebuild;
mod settings;
mod snapshot;
mod value_label_resolver;

pub use axis_label_resolver::resolve_axis_labels;
pub use axis_stack_label_resolver::resolve_axis_stack_labels;
pub use engine::OverlayEngine;
pub use engine_config::OverlayEngineConfig;
pub use json_contract::{OVERLAY_SNAPSHOT_JSON_SCHEMA_V1, OverlaySnapshotJsonContractV1};
pub use marker_resolver::{MarkerContext, resolve_marker};
pub use rebuild::rebuild_overlay;
pub use settings::{PlotAreaProperties, PlotAreaSettings};
pub use snapshot::OverlaySnapshot;
pub use value_label_resolver::resolve_value_labels;
