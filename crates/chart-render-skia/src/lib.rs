// File: crates/chart-render-skia/src/lib.rs
// Summary: Presenter backed by a Skia CPU raster surface; produces a PNG snapshot of the chart.

use gdp_chart_core::axis::TICK_SIZE;
use gdp_chart_core::{
    Axis, BarElement, ChartRenderer, Color, Dataset, HoverHandlers, Orient, Presenter, RenderError, Theme,
    TooltipHandle,
};
use skia_safe as skia;
use tracing::debug;

pub struct RasterOptions {
    pub theme: Theme,
    /// Turn off to avoid font variance across platforms (snapshots, benches).
    pub draw_labels: bool,
    pub title_size: f32,
    pub label_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::classic(), draw_labels: true, title_size: 18.0, label_size: 10.0 }
    }
}

#[inline]
fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaPresenter {
    opts: RasterOptions,
    surface: Option<skia::Surface>,
    title: Option<String>,
    tooltip: Option<TooltipHandle>,
}

impl SkiaPresenter {
    pub fn new(opts: RasterOptions) -> Self {
        Self { opts, surface: None, title: None, tooltip: None }
    }

    fn font(size: f32) -> skia::Font {
        let mut font = skia::Font::default();
        font.set_size(size);
        font
    }

    fn text_paint(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(sk(color));
        paint.set_anti_alias(true);
        paint
    }

    fn stroke_paint(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(sk(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint
    }

    fn draw_title(&mut self) {
        if !self.opts.draw_labels {
            return;
        }
        let (Some(surface), Some(title)) = (self.surface.as_mut(), self.title.as_deref()) else {
            return;
        };
        let width = surface.width() as f32;
        let font = Self::font(self.opts.title_size);
        let paint = Self::text_paint(self.opts.theme.title);
        let (text_w, _) = font.measure_str(title, Some(&paint));
        let canvas = surface.canvas();
        canvas.draw_str(title, ((width - text_w) * 0.5, self.opts.title_size + 6.0), &font, &paint);
    }

    fn draw_tooltip(&mut self) {
        let Some(tip) = self.tooltip.as_ref().map(|t| t.borrow().clone()) else { return };
        if !tip.is_visible() {
            return;
        }
        let Some(surface) = self.surface.as_mut() else { return };
        let theme = self.opts.theme;
        let font = Self::font(self.opts.label_size + 2.0);
        let text_paint = Self::text_paint(theme.tooltip_text);
        let lines: Vec<&str> = tip.html.split("<br>").collect();
        let line_h = self.opts.label_size + 6.0;
        let text_w = lines
            .iter()
            .map(|l| font.measure_str(l, Some(&text_paint)).0)
            .fold(0.0f32, f32::max);

        let (left, top) = (tip.left as f32, tip.top as f32);
        let mut bg = skia::Paint::default();
        bg.set_color(sk(theme.tooltip_background));
        bg.set_anti_alias(true);
        let rect = skia::Rect::from_xywh(left, top, text_w + 10.0, line_h * lines.len() as f32 + 10.0);
        let canvas = surface.canvas();
        canvas.draw_round_rect(rect, 5.0, 5.0, &bg);
        if self.opts.draw_labels {
            for (i, line) in lines.iter().enumerate() {
                canvas.draw_str(line, (left + 5.0, top + 5.0 + line_h * (i as f32 + 1.0) - 4.0), &font, &text_paint);
            }
        }
    }

    /// Snapshot the surface and encode it; fails if no surface was created.
    pub fn encode_png(mut self) -> Result<Vec<u8>, RenderError> {
        self.draw_tooltip();
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| RenderError::Surface("no surface was created".into()))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| RenderError::Surface("encode PNG failed".into()))?;
        debug!(bytes = data.len(), "png encoded");
        Ok(data.as_bytes().to_vec())
    }
}

impl Presenter for SkiaPresenter {
    fn heading(&mut self, _id: &str, text: &str) {
        self.title = Some(text.to_string());
        self.draw_title();
    }

    fn surface(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let dims = (width as i32, height as i32);
        let mut surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| RenderError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(sk(self.opts.theme.background));
        self.surface = Some(surface);
        self.draw_title();
        Ok(())
    }

    fn axis(&mut self, axis: &Axis) {
        let Some(surface) = self.surface.as_mut() else { return };
        let theme = self.opts.theme;
        let line = Self::stroke_paint(theme.axis_line);
        let label_paint = Self::text_paint(theme.axis_label);
        let font = Self::font(self.opts.label_size);
        let draw_labels = self.opts.draw_labels;
        let canvas = surface.canvas();

        let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
        let size = TICK_SIZE as f32;
        match axis.orient {
            Orient::Bottom => {
                canvas.draw_line((tx + r0, ty), (tx + r1, ty), &line);
                for tick in &axis.ticks {
                    let x = tx + tick.px as f32;
                    canvas.draw_line((x, ty), (x, ty + size), &line);
                    if draw_labels {
                        let (w, _) = font.measure_str(&tick.label, Some(&label_paint));
                        canvas.draw_str(&tick.label, (x - w * 0.5, ty + size + 3.0 + self.opts.label_size), &font, &label_paint);
                    }
                }
            }
            Orient::Left => {
                canvas.draw_line((tx, ty + r0), (tx, ty + r1), &line);
                for tick in &axis.ticks {
                    let y = ty + tick.px as f32;
                    canvas.draw_line((tx - size, y), (tx, y), &line);
                    if draw_labels {
                        let (w, _) = font.measure_str(&tick.label, Some(&label_paint));
                        canvas.draw_str(&tick.label, (tx - size - 3.0 - w, y + self.opts.label_size * 0.35), &font, &label_paint);
                    }
                }
            }
        }
    }

    fn bar(&mut self, bar: &BarElement, _hover: HoverHandlers) {
        let Some(surface) = self.surface.as_mut() else { return };
        let mut fill = skia::Paint::default();
        fill.set_color(sk(bar.fill));
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        let g = &bar.geometry;
        let rect = skia::Rect::from_xywh(g.x as f32, g.y as f32, g.width as f32, g.height as f32);
        surface.canvas().draw_rect(rect, &fill);
    }

    fn tooltip(&mut self, _id: &str, tooltip: &TooltipHandle) {
        self.tooltip = Some(tooltip.clone());
    }
}

/// Render `ds` with `renderer` and return PNG bytes.
pub fn render_png(renderer: &ChartRenderer, ds: &Dataset, opts: RasterOptions) -> Result<Vec<u8>, RenderError> {
    let mut presenter = SkiaPresenter::new(opts);
    renderer.render(ds, &mut presenter)?;
    presenter.encode_png()
}
