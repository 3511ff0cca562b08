// File: crates/chart-core/src/present.rs
// Summary: Presenter trait: the seam between chart layout and whatever draws it.

use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::BarGeometry;
use crate::tooltip::{HoverHandlers, TooltipHandle};
use crate::types::Color;

/// A fully resolved bar, ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BarElement {
    pub index: usize,
    pub class: &'static str,
    pub geometry: BarGeometry,
    pub fill: Color,
    /// Raw date string, as delivered by the source.
    pub data_date: String,
    /// Raw value, unrounded.
    pub data_gdp: String,
}

/// Receives draw instructions in order: heading, surface, axes, bars, tooltip.
///
/// `surface` is the only fallible step; backends that allocate pixels can fail there.
pub trait Presenter {
    fn heading(&mut self, id: &str, text: &str);
    fn surface(&mut self, width: u32, height: u32) -> Result<(), RenderError>;
    fn axis(&mut self, axis: &Axis);
    /// `hover` is bound to this bar only; backends without pointer input may drop it.
    fn bar(&mut self, bar: &BarElement, hover: HoverHandlers);
    fn tooltip(&mut self, id: &str, tooltip: &TooltipHandle);
}
