// File: crates/chart-core/src/tooltip.rs
// Summary: Shared tooltip state and the per-bar hover handlers that drive it.
// Notes:
// - One tooltip per chart. Every bar's handlers hold a clone of the same handle,
//   so the last hover-enter wins.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dataset::GdpRecord;
use crate::html::escape;

/// Element id of the tooltip overlay.
pub const TOOLTIP_ID: &str = "tooltip";
/// Pointer offsets applied on hover-enter.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -20.0;

/// Page coordinates delivered with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub const fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub opacity: f32,
    pub left: f64,
    pub top: f64,
    /// Inner markup shown in the overlay.
    pub html: String,
    /// Raw date of the bar last hovered.
    pub data_date: Option<String>,
}

pub type TooltipHandle = Rc<RefCell<Tooltip>>;

/// Markup shown for a record, shared by every presenter.
pub fn content_for(record: &GdpRecord) -> String {
    format!("Date: {}<br>GDP: ${} Billion", escape(&record.raw_date), record.gdp_attr())
}

impl Tooltip {
    /// New hidden tooltip behind a shareable handle.
    pub fn shared() -> TooltipHandle {
        Rc::new(RefCell::new(Tooltip::default()))
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn show(&mut self, record: &GdpRecord, pointer: PointerEvent) {
        self.opacity = 1.0;
        self.left = pointer.page_x + OFFSET_X;
        self.top = pointer.page_y + OFFSET_Y;
        self.html = content_for(record);
        self.data_date = Some(record.raw_date.clone());
    }

    /// Only visibility changes; content and position stay as last shown.
    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }
}

/// Hover-enter / hover-leave callbacks bound to one bar.
pub struct HoverHandlers {
    on_enter: Box<dyn Fn(PointerEvent)>,
    on_leave: Box<dyn Fn()>,
}

impl HoverHandlers {
    pub fn new(on_enter: impl Fn(PointerEvent) + 'static, on_leave: impl Fn() + 'static) -> Self {
        Self { on_enter: Box::new(on_enter), on_leave: Box::new(on_leave) }
    }

    /// Handlers that show `record` in `tooltip` on enter and hide it on leave.
    pub fn for_record(tooltip: &TooltipHandle, record: &GdpRecord) -> Self {
        let enter_tip = Rc::clone(tooltip);
        let leave_tip = Rc::clone(tooltip);
        let record = record.clone();
        Self::new(
            move |p| enter_tip.borrow_mut().show(&record, p),
            move || leave_tip.borrow_mut().hide(),
        )
    }

    pub fn enter(&self, pointer: PointerEvent) {
        (self.on_enter)(pointer)
    }

    pub fn leave(&self) {
        (self.on_leave)()
    }
}

impl std::fmt::Debug for HoverHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverHandlers").finish_non_exhaustive()
    }
}
