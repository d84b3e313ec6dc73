//! Optional feature modules live here.
//!
//! Keep extensions decoupled from the rebuild pipeline; they share the core
//! data model (icon catalogs) but never feed back into frame layout.

pub mod tooltip;

pub use tooltip::{
    ProgressIndicator, TooltipContent, TooltipEntry, TooltipProperties, TooltipRow,
    TooltipSettings, TooltipStyle, build_tooltip_rows,
};
