pub mod context;
pub mod icons;
pub mod labels;
pub mod series;
pub mod style;
pub mod types;

pub use context::ChartContext;
pub use icons::IconCatalog;
pub use labels::{AxisLabel, AxisStackLabel, LabelTree, ValueLabel};
pub use series::{DataPoint, DataRect, SeriesDescriptor};
pub use style::OverlayStyle;
pub use types::{ChartKind, ChartSize, ClipWindow, Rect};
