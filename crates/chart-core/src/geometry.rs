// File: crates/chart-core/src/geometry.rs
// Summary: Per-record bar rectangles derived from the two scales.

use crate::dataset::{Dataset, GdpRecord};
use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::types::Viewport;

/// Pixel rectangle of one bar; `y` is the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// Uniform bar width: the plot width shared by every record, gaps between dates ignored.
/// `None` for an empty dataset.
pub fn bar_width(vp: &Viewport, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(vp.plot_width() / count as f64)
}

/// Geometry for a single record.
///
/// For non-negative values this is `y = yScale(v)`, `height = baseline - y`. A
/// negative value hangs below the zero line instead of producing a negative height.
pub fn bar_for(record: &GdpRecord, x_scale: &TimeScale, y_scale: &ValueScale, width: f64) -> BarGeometry {
    let zero = y_scale.baseline_px();
    let top = y_scale.to_px(record.value);
    BarGeometry {
        x: x_scale.to_px(record.date),
        y: top.min(zero),
        width,
        height: (zero - top).abs(),
    }
}

/// One rectangle per record, in dataset order.
pub fn bars(ds: &Dataset, x_scale: &TimeScale, y_scale: &ValueScale, vp: &Viewport) -> Vec<BarGeometry> {
    let Some(width) = bar_width(vp, ds.len()) else {
        return Vec::new();
    };
    ds.iter().map(|r| bar_for(r, x_scale, y_scale, width)).collect()
}
