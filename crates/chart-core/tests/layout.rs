// File: crates/chart-core/tests/layout.rs
// Purpose: Bar geometry, scale bounds and degenerate inputs.

use chrono::NaiveDate;
use gdp_chart_core::{ChartLayout, Dataset, GdpRecord, RenderError, Viewport};

fn quarterly(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let year = 1947 + (i / 4) as i32;
            let month = 1 + 3 * (i % 4) as u32;
            let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let value = 243.1 + (i as f64) * 65.3 + ((i as f64) * 0.7).sin() * 40.0;
            GdpRecord::new(date, date.format("%Y-%m-%d").to_string(), value)
        })
        .collect()
}

#[test]
fn two_quarter_scenario() {
    let ds = Dataset::new(vec![
        GdpRecord::parse("1947-01-01", 243.1).unwrap(),
        GdpRecord::parse("1947-04-01", 246.3).unwrap(),
    ]);
    let layout = ChartLayout::compute(&ds, &Viewport::new(800, 400, 40)).expect("layout");

    assert_eq!(layout.bars.len(), 2);
    assert_eq!(layout.bars[0].x, 40.0);
    assert_eq!(layout.bars[1].x, 760.0);
    assert!(layout.bars.iter().all(|b| b.width == 360.0));
    // tallest bar reaches the top padding, heights measured from the baseline
    assert_eq!(layout.bars[1].y, 40.0);
    assert_eq!(layout.bars[1].height, 320.0);
    let expected_y = 360.0 - 243.1 / 246.3 * 320.0;
    assert!((layout.bars[0].y - expected_y).abs() < 1e-9);
    assert!((layout.bars[0].height - (360.0 - expected_y)).abs() < 1e-9);
}

#[test]
fn bars_stay_inside_viewport() {
    let vp = Viewport::default();
    let ds = quarterly(274);
    let layout = ChartLayout::compute(&ds, &vp).expect("layout");

    assert_eq!(layout.bars.len(), ds.len());
    for b in &layout.bars {
        assert!(b.x >= 0.0 && b.x <= vp.width as f64, "x out of range: {}", b.x);
        assert!(b.y >= 0.0 && b.y <= vp.height as f64, "y out of range: {}", b.y);
        assert!(b.height >= 0.0);
        assert!((b.bottom() - vp.baseline_y()).abs() < 1e-9);
    }
    // x follows source order for ascending dates
    assert!(layout.bars.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn axes_have_several_ticks() {
    let layout = ChartLayout::compute(&quarterly(274), &Viewport::default()).expect("layout");
    assert_eq!(layout.x_axis.id, "x-axis");
    assert_eq!(layout.y_axis.id, "y-axis");
    assert!(layout.x_axis.ticks.len() > 1);
    assert!(layout.y_axis.ticks.len() > 1);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = ChartLayout::compute(&Dataset::default(), &Viewport::default()).unwrap_err();
    assert!(matches!(err, RenderError::EmptyDataset));
}

#[test]
fn padding_consuming_viewport_is_rejected() {
    let ds = quarterly(4);
    let err = ChartLayout::compute(&ds, &Viewport::new(80, 400, 40)).unwrap_err();
    assert!(matches!(err, RenderError::InvalidViewport { width: 80, .. }));
}

#[test]
fn single_timestamp_collapses_to_midpoint() {
    let ds = Dataset::new(vec![
        GdpRecord::parse("1990-01-01", 5000.0).unwrap(),
        GdpRecord::parse("1990-01-01", 6000.0).unwrap(),
    ]);
    let layout = ChartLayout::compute(&ds, &Viewport::default()).expect("layout");
    assert!(layout.x_scale.is_degenerate());
    assert!(layout.bars.iter().all(|b| b.x == 400.0));
    assert_eq!(layout.x_axis.ticks.len(), 1);
    assert_eq!(layout.x_axis.ticks[0].label, "1990");
}

#[test]
fn all_zero_values_rest_on_the_x_axis() {
    let ds = Dataset::new(vec![
        GdpRecord::parse("2000-01-01", 0.0).unwrap(),
        GdpRecord::parse("2000-04-01", 0.0).unwrap(),
    ]);
    let vp = Viewport::default();
    let layout = ChartLayout::compute(&ds, &vp).expect("layout");
    for b in &layout.bars {
        assert_eq!(b.y, vp.baseline_y());
        assert_eq!(b.height, 0.0);
    }
    assert_eq!(layout.y_axis.ticks.len(), 1);
    assert_eq!(layout.y_axis.ticks[0].px, vp.baseline_y());
}
