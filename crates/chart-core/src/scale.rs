// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms from data domains to pixel ranges.

use chrono::{Datelike, NaiveDate};

use crate::dataset::Dataset;
use crate::types::Viewport;

/// Maps a domain value onto a pixel coordinate.
pub trait ScaleTransform {
    type Domain;
    fn to_px(&self, v: Self::Domain) -> f64;
    /// Output interval `(start, end)`; `start` may exceed `end` for inverted scales.
    fn range(&self) -> (f64, f64);
}

/// Linear interpolation from `[d0, d1]` to `[r0, r1]`.
///
/// A collapsed domain (`d0 == d1`) maps every input to the midpoint of the range
/// instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.d1 == self.d0
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return (self.r0 + self.r1) * 0.5;
        }
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// Calendar dates are mapped by their day number, so whole days stay exact.
#[inline]
pub fn date_to_days(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Horizontal time scale: `[min date, max date] -> [padding, width - padding]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, left_px: f64, right_px: f64) -> Self {
        let linear = LinearScale::new((date_to_days(start), date_to_days(end)), (left_px, right_px));
        Self { start, end, linear }
    }

    /// Build from the dataset's observed date extent; `None` when empty.
    pub fn from_dataset(ds: &Dataset, vp: &Viewport) -> Option<Self> {
        let (lo, hi) = ds.date_extent()?;
        let p = vp.padding as f64;
        Some(Self::new(lo, hi, p, vp.width as f64 - p))
    }

    pub fn is_degenerate(&self) -> bool {
        self.linear.is_degenerate()
    }
}

impl ScaleTransform for TimeScale {
    type Domain = NaiveDate;

    #[inline]
    fn to_px(&self, d: NaiveDate) -> f64 {
        self.linear.map(date_to_days(d))
    }

    fn range(&self) -> (f64, f64) {
        (self.linear.r0, self.linear.r1)
    }
}

/// Vertical value scale: `[floor, vmax] -> [height - padding, padding]` (inverted).
///
/// The floor is fixed at zero so bars grow from a zero baseline. Negative data
/// extends the domain below zero rather than moving the baseline. An all-zero
/// domain pins every value to the bottom of the range, so zero-height bars sit
/// on the x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(vmin: f64, vmax: f64, bottom_px: f64, top_px: f64) -> Self {
        Self { linear: LinearScale::new((vmin, vmax), (bottom_px, top_px)) }
    }

    pub fn from_dataset(ds: &Dataset, vp: &Viewport) -> Option<Self> {
        let (lo, hi) = ds.value_extent()?;
        let p = vp.padding as f64;
        Some(Self::new(lo.min(0.0), hi.max(0.0), vp.height as f64 - p, p))
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.linear.d0, self.linear.d1)
    }

    /// Pixel row of the zero value.
    pub fn baseline_px(&self) -> f64 {
        self.to_px(0.0)
    }
}

impl ScaleTransform for ValueScale {
    type Domain = f64;

    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        if self.linear.is_degenerate() {
            return self.linear.r0;
        }
        self.linear.map(v)
    }

    fn range(&self) -> (f64, f64) {
        (self.linear.r0, self.linear.r1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints() {
        let s = LinearScale::new((0.0, 100.0), (360.0, 40.0));
        assert_eq!(s.map(0.0), 360.0);
        assert_eq!(s.map(100.0), 40.0);
        assert_eq!(s.map(50.0), 200.0);
    }

    #[test]
    fn collapsed_domain_maps_to_midpoint() {
        let s = LinearScale::new((5.0, 5.0), (40.0, 760.0));
        assert_eq!(s.map(5.0), 400.0);
        assert_eq!(s.map(1e9), 400.0);
    }

    #[test]
    fn all_zero_values_sit_on_the_bottom_edge() {
        let s = ValueScale::new(0.0, 0.0, 360.0, 40.0);
        assert_eq!(s.to_px(0.0), 360.0);
        assert_eq!(s.baseline_px(), 360.0);
    }

    #[test]
    fn day_numbers_are_consecutive() {
        let d = NaiveDate::from_ymd_opt(1947, 4, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(1947, 4, 2).unwrap();
        assert_eq!(date_to_days(next) - date_to_days(d), 1.0);
    }
}
