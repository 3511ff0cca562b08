// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, layout, renderer and presenters.

pub mod chart;
pub mod dataset;
pub mod axis;
pub mod ticks;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod tooltip;
pub mod present;
pub mod html;
pub mod error;

pub use chart::{ChartLayout, ChartRenderer};
pub use dataset::{Dataset, DatasetMeta, GdpRecord};
pub use axis::{Axis, Orient, Tick};
pub use geometry::BarGeometry;
pub use types::{Color, Viewport};
pub use theme::Theme;
pub use tooltip::{HoverHandlers, PointerEvent, Tooltip, TooltipHandle};
pub use present::{BarElement, Presenter};
pub use html::HtmlDocument;
pub use error::RenderError;
