// File: crates/chart-core/src/chart.rs
// Summary: Chart layout (scales, axes, bar geometry) and the single-pass render into a Presenter.

use tracing::debug;

use crate::axis::Axis;
use crate::dataset::Dataset;
use crate::error::RenderError;
use crate::geometry::{self, BarGeometry};
use crate::present::{BarElement, Presenter};
use crate::scale::{TimeScale, ValueScale};
use crate::theme::Theme;
use crate::tooltip::{HoverHandlers, Tooltip, TooltipHandle, TOOLTIP_ID};
use crate::types::Viewport;

pub const TITLE: &str = "United States GDP Bar Chart";
pub const TITLE_ID: &str = "title";
pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const BAR_CLASS: &str = "bar";

/// Everything geometric about a chart, computed before anything is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<BarGeometry>,
}

impl ChartLayout {
    pub fn compute(ds: &Dataset, vp: &Viewport) -> Result<Self, RenderError> {
        if !vp.is_usable() {
            return Err(RenderError::InvalidViewport {
                width: vp.width,
                height: vp.height,
                padding: vp.padding,
            });
        }
        let x_scale = TimeScale::from_dataset(ds, vp).ok_or(RenderError::EmptyDataset)?;
        let y_scale = ValueScale::from_dataset(ds, vp).ok_or(RenderError::EmptyDataset)?;

        let x_axis = Axis::bottom(X_AXIS_ID, &x_scale, vp);
        let y_axis = Axis::left(Y_AXIS_ID, &y_scale, vp);
        debug!(
            x_start = %x_scale.start,
            x_end = %x_scale.end,
            y_domain = ?y_scale.domain(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "chart scales built"
        );

        let bars = geometry::bars(ds, &x_scale, &y_scale, vp);
        Ok(Self { viewport: *vp, x_scale, y_scale, x_axis, y_axis, bars })
    }
}

/// Renders a dataset once into a presenter.
#[derive(Clone, Debug)]
pub struct ChartRenderer {
    pub viewport: Viewport,
    pub theme: Theme,
    pub title: String,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, theme: Theme::default(), title: TITLE.to_string() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Lay out `ds` and emit surface, heading, axes, bars and tooltip to `out`.
    ///
    /// The surface is allocated first, so nothing else is emitted when layout or
    /// allocation fails. Presenters place the heading above the surface on their
    /// own. The returned handle is the tooltip every bar's hover handlers write to.
    pub fn render<P: Presenter + ?Sized>(&self, ds: &Dataset, out: &mut P) -> Result<TooltipHandle, RenderError> {
        let layout = ChartLayout::compute(ds, &self.viewport)?;

        out.surface(self.viewport.width, self.viewport.height)?;
        out.heading(TITLE_ID, &self.title);
        out.axis(&layout.x_axis);
        out.axis(&layout.y_axis);

        let tooltip = Tooltip::shared();
        for (index, (record, geometry)) in ds.iter().zip(&layout.bars).enumerate() {
            let bar = BarElement {
                index,
                class: BAR_CLASS,
                geometry: *geometry,
                fill: self.theme.bar_fill,
                data_date: record.raw_date.clone(),
                data_gdp: record.gdp_attr(),
            };
            out.bar(&bar, HoverHandlers::for_record(&tooltip, record));
        }
        out.tooltip(TOOLTIP_ID, &tooltip);

        debug!(bars = layout.bars.len(), "chart rendered");
        Ok(tooltip)
    }
}
