// File: crates/chart-core/src/axis.rs
// Summary: Axis model: placement, identifier and labelled ticks generated from a scale.

use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::ticks::{format_date_tick, format_value_tick, linear_ticks, tick_step, time_ticks, DEFAULT_TICK_COUNT};
use crate::types::Viewport;

/// Length of the outward tick marks, in pixels.
pub const TICK_SIZE: f64 = 6.0;

/// Which edge of the plot the axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in surface pixels.
    pub px: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: String,
    pub orient: Orient,
    /// Translation of the axis group on the surface.
    pub translate: (f64, f64),
    /// Pixel span of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis for a time scale, placed on the baseline.
    pub fn bottom(id: impl Into<String>, scale: &TimeScale, vp: &Viewport) -> Self {
        let ticks = time_ticks(scale.start, scale.end, DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|d| Tick { px: scale.to_px(d), label: format_date_tick(d) })
            .collect();
        Self {
            id: id.into(),
            orient: Orient::Bottom,
            translate: (0.0, vp.baseline_y()),
            range: scale.range(),
            ticks,
        }
    }

    /// Left axis for a value scale, placed on the left padding edge.
    pub fn left(id: impl Into<String>, scale: &ValueScale, vp: &Viewport) -> Self {
        let (d0, d1) = scale.domain();
        let step = tick_step(d0, d1, DEFAULT_TICK_COUNT);
        let ticks = linear_ticks(d0, d1, DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|v| Tick { px: scale.to_px(v), label: format_value_tick(v, step) })
            .collect();
        Self {
            id: id.into(),
            orient: Orient::Left,
            translate: (vp.padding as f64, 0.0),
            range: scale.range(),
            ticks,
        }
    }

    /// SVG path of the domain line with outer tick caps, in axis-local coordinates.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orient {
            Orient::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            Orient::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        }
    }
}
