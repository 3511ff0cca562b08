// File: crates/chart-core/src/ticks.rs
// Summary: Tick layout helpers: 1-2-5 numeric ticks, calendar ticks, and their labels.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use num_format::{Locale, ToFormattedString};

use crate::scale::date_to_days;

/// Tick count the axes aim for.
pub const DEFAULT_TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TickSpec {
    i1: f64,
    i2: f64,
    // negative when the step is a fraction: step == 1 / -inc
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start { i1 += 1.0; }
        if i2 * step > stop { i2 -= 1.0; }
        inc = step;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    TickSpec { i1, i2, inc }
}

/// Nice step size (1, 2 or 5 times a power of ten) for roughly `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if count == 0 || !(hi - lo).is_normal() {
        return 0.0;
    }
    let spec = tick_spec(lo, hi, count as f64);
    if spec.inc < 0.0 { 1.0 / -spec.inc } else { spec.inc }
}

/// Evenly spaced "nice" values inside `[start, stop]`, in the same direction.
///
/// A collapsed interval yields the single value; `count == 0` yields nothing.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(lo, hi, count as f64);
    if !(spec.i2 >= spec.i1) {
        return Vec::new();
    }
    let n = (spec.i2 - spec.i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = spec.i1 + i as f64;
            if spec.inc < 0.0 { k / -spec.inc } else { k * spec.inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Label for a numeric tick: thousands grouping, as many decimals as `step` needs.
pub fn format_value_tick(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = int_part.parse::<u64>().map(|n| n.to_formatted_string(&Locale::en)).unwrap_or_else(|_| int_part.to_string());
    let negative = v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::with_capacity(grouped.len() + decimals + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Calendar interval used to place time ticks on boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

const DAYS_PER_YEAR: f64 = 365.0;

// ascending by approximate length in days
const CANDIDATES: [(TimeInterval, f64); 6] = [
    (TimeInterval::Day(1), 1.0),
    (TimeInterval::Day(2), 2.0),
    (TimeInterval::Week, 7.0),
    (TimeInterval::Month(1), 30.0),
    (TimeInterval::Month(3), 90.0),
    (TimeInterval::Year(1), DAYS_PER_YEAR),
];

impl TimeInterval {
    /// Interval giving close to `count` ticks over `[start, end]`.
    pub fn choose(start: NaiveDate, end: NaiveDate, count: usize) -> Self {
        let span = (date_to_days(end) - date_to_days(start)).abs();
        let target = span / count.max(1) as f64;

        let i = CANDIDATES.partition_point(|&(_, days)| days <= target);
        if i == CANDIDATES.len() {
            let lo = date_to_days(start) / DAYS_PER_YEAR;
            let hi = date_to_days(end) / DAYS_PER_YEAR;
            let years = tick_step(lo, hi, count).round().max(1.0);
            return TimeInterval::Year(years as i32);
        }
        if i == 0 {
            return TimeInterval::Day(1);
        }
        let (below, below_days) = CANDIDATES[i - 1];
        let (above, above_days) = CANDIDATES[i];
        if target / below_days < above_days / target { below } else { above }
    }

    fn contains(&self, d: NaiveDate) -> bool {
        match *self {
            TimeInterval::Day(n) => (d.day() - 1) % n.max(1) == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Month(n) => d.day() == 1 && d.month0() % n.max(1) == 0,
            TimeInterval::Year(n) => d.ordinal() == 1 && d.year().rem_euclid(n.max(1)) == 0,
        }
    }

    /// Boundaries of this interval inside `[start, end]`.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let (lo, hi) = if end < start { (end, start) } else { (start, end) };
        match *self {
            TimeInterval::Year(n) => {
                let n = n.max(1);
                let mut y = if lo.ordinal() == 1 { lo.year() } else { lo.year() + 1 };
                y += (n - y.rem_euclid(n)) % n;
                let mut out = Vec::new();
                while let Some(d) = NaiveDate::from_ymd_opt(y, 1, 1) {
                    if d > hi { break; }
                    out.push(d);
                    y += n;
                }
                out
            }
            TimeInterval::Month(_) => {
                let mut cur = NaiveDate::from_ymd_opt(lo.year(), lo.month(), 1);
                let mut out = Vec::new();
                while let Some(d) = cur {
                    if d > hi { break; }
                    if d >= lo && self.contains(d) {
                        out.push(d);
                    }
                    cur = d.checked_add_months(chrono::Months::new(1));
                }
                out
            }
            TimeInterval::Day(_) | TimeInterval::Week => {
                let mut out = Vec::new();
                let mut d = lo;
                while d <= hi {
                    if self.contains(d) {
                        out.push(d);
                    }
                    match d.checked_add_signed(Duration::days(1)) {
                        Some(next) => d = next,
                        None => break,
                    }
                }
                out
            }
        }
    }
}

/// Calendar ticks over `[start, end]`; a single-day domain yields that day.
pub fn time_ticks(start: NaiveDate, end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if start == end {
        return vec![start];
    }
    if count == 0 {
        return Vec::new();
    }
    TimeInterval::choose(start, end, count).range(start, end)
}

/// Multi-scale date label: year on 1 January, month name on the 1st, else `Mon DD`.
pub fn format_date_tick(d: NaiveDate) -> String {
    if d.ordinal() == 1 {
        d.format("%Y").to_string()
    } else if d.day() == 1 {
        d.format("%B").to_string()
    } else {
        d.format("%b %d").to_string()
    }
}
