// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render into the HTML document and check the addressable elements.

use gdp_chart_core::{ChartRenderer, Dataset, GdpRecord, HtmlDocument, Theme, Viewport};

fn sample() -> Dataset {
    Dataset::new(vec![
        GdpRecord::parse("1947-01-01", 243.1).unwrap(),
        GdpRecord::parse("1947-04-01", 246.3).unwrap(),
    ])
}

#[test]
fn render_smoke_html() {
    let mut doc = HtmlDocument::new(Theme::classic());
    ChartRenderer::new(Viewport::new(800, 400, 40)).render(&sample(), &mut doc).expect("render should succeed");
    let html = doc.finish();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1 id=\"title\">United States GDP Bar Chart</h1>"));
    assert!(html.contains("width=\"800\" height=\"400\""));
    assert!(html.contains("<g id=\"x-axis\" transform=\"translate(0, 360)\""));
    assert!(html.contains("<g id=\"y-axis\" transform=\"translate(40, 0)\""));
    assert_eq!(html.matches("<rect class=\"bar\"").count(), 2);
    assert!(html.matches("class=\"tick\"").count() > 2);
    assert!(html.contains("<rect class=\"bar\" x=\"40\" y=\""));
    assert_eq!(html.matches("width=\"360\"").count(), 2);
    assert!(html.contains("data-date=\"1947-04-01\" data-gdp=\"246.3\""));
    assert!(html.contains("<div id=\"tooltip\""));
    assert!(html.contains("opacity: 0;"));
    assert!(html.contains("addEventListener(\"mouseover\""));

    // heading precedes the drawing surface
    let h1 = html.find("<h1").unwrap();
    let svg = html.find("<svg").unwrap();
    assert!(h1 < svg);
}

#[test]
fn title_is_escaped() {
    let mut doc = HtmlDocument::new(Theme::dark());
    ChartRenderer::default().with_title("GDP <US & Co>").render(&sample(), &mut doc).expect("render");
    let html = doc.finish();
    assert!(html.contains("<h1 id=\"title\">GDP &lt;US &amp; Co&gt;</h1>"));
    assert!(html.contains("<title>GDP &lt;US &amp; Co&gt;</title>"));
}
