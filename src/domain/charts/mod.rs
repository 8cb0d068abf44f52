pub mod datasets;
pub mod specs;
pub mod value_objects;

pub use specs::{SlideChart, chart_for_slide};
pub use value_objects::{ChartKind, ChartSpec, Rgba, TooltipFormat};
