// File: crates/chart-core/src/html.rs
// Summary: Presenter that writes a standalone HTML page with an inline SVG chart.
// Notes:
// - Hover handlers cannot cross into the browser; the page carries a small script
//   that applies the same enter/leave transitions to the tooltip element.

use crate::axis::{Axis, Orient, TICK_SIZE};
use crate::chart::BAR_CLASS;
use crate::error::RenderError;
use crate::present::{BarElement, Presenter};
use crate::theme::Theme;
use crate::tooltip::{HoverHandlers, TooltipHandle, OFFSET_X, OFFSET_Y, TOOLTIP_ID};

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug)]
pub struct HtmlDocument {
    theme: Theme,
    page_title: String,
    heading: String,
    svg_open: String,
    svg_body: String,
    tooltip: String,
}

impl HtmlDocument {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            page_title: String::new(),
            heading: String::new(),
            svg_open: String::new(),
            svg_body: String::new(),
            tooltip: String::new(),
        }
    }

    /// Assemble the page. Call after the chart has been rendered into `self`.
    pub fn finish(self) -> String {
        let t = &self.theme;
        let mut page = String::with_capacity(self.svg_body.len() + 2048);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", escape(&self.page_title)));
        page.push_str(&format!(
            "<style>\nbody {{ background: {}; color: {}; font-family: sans-serif; }}\nh1 {{ text-align: center; }}\nsvg {{ display: block; margin: 0 auto; color: {}; }}\n</style>\n",
            t.background.css(),
            t.title.css(),
            t.axis_line.css(),
        ));
        page.push_str("</head>\n<body>\n");
        page.push_str(&self.heading);
        if !self.svg_open.is_empty() {
            page.push_str(&self.svg_open);
            page.push_str(&self.svg_body);
            page.push_str("</svg>\n");
        }
        page.push_str(&self.tooltip);
        page.push_str("<script>\n");
        page.push_str(&hover_script());
        page.push_str("\n</script>\n</body>\n</html>\n");
        page
    }

    fn push_axis(&mut self, axis: &Axis) {
        let (tx, ty) = axis.translate;
        let anchor = match axis.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let body = &mut self.svg_body;
        body.push_str(&format!(
            "<g id=\"{}\" transform=\"translate({tx}, {ty})\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{anchor}\">\n",
            escape(&axis.id),
        ));
        body.push_str(&format!("<path class=\"domain\" stroke=\"currentColor\" d=\"{}\"></path>\n", axis.domain_path()));
        let label_fill = self.theme.axis_label.css();
        for tick in &axis.ticks {
            let label = escape(&tick.label);
            let tick_el = match axis.orient {
                Orient::Bottom => format!(
                    "<g class=\"tick\" opacity=\"1\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{TICK_SIZE}\"></line><text fill=\"{label_fill}\" y=\"{}\" dy=\"0.71em\">{label}</text></g>\n",
                    tick.px,
                    TICK_SIZE + 3.0,
                ),
                Orient::Left => format!(
                    "<g class=\"tick\" opacity=\"1\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"-{TICK_SIZE}\"></line><text fill=\"{label_fill}\" x=\"-{}\" dy=\"0.32em\">{label}</text></g>\n",
                    tick.px,
                    TICK_SIZE + 3.0,
                ),
            };
            body.push_str(&tick_el);
        }
        body.push_str("</g>\n");
    }
}

impl Presenter for HtmlDocument {
    fn heading(&mut self, id: &str, text: &str) {
        self.page_title = text.to_string();
        self.heading = format!("<h1 id=\"{}\">{}</h1>\n", escape(id), escape(text));
    }

    fn surface(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.svg_open = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        Ok(())
    }

    fn axis(&mut self, axis: &Axis) {
        self.push_axis(axis);
    }

    fn bar(&mut self, bar: &BarElement, _hover: HoverHandlers) {
        let g = &bar.geometry;
        self.svg_body.push_str(&format!(
            "<rect class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-date=\"{}\" data-gdp=\"{}\"></rect>\n",
            bar.class,
            g.x,
            g.y,
            g.width,
            g.height,
            bar.fill.css(),
            escape(&bar.data_date),
            escape(&bar.data_gdp),
        ));
    }

    fn tooltip(&mut self, id: &str, tooltip: &TooltipHandle) {
        let tip = tooltip.borrow();
        let data_date = tip
            .data_date
            .as_deref()
            .map(|d| format!(" data-date=\"{}\"", escape(d)))
            .unwrap_or_default();
        // html is trusted markup built by tooltip::content_for
        self.tooltip = format!(
            "<div id=\"{}\"{data_date} style=\"position: absolute; pointer-events: none; background-color: {}; color: {}; padding: 5px; border-radius: 5px; opacity: {}; left: {}px; top: {}px;\">{}</div>\n",
            escape(id),
            self.theme.tooltip_background.css(),
            self.theme.tooltip_text.css(),
            tip.opacity,
            tip.left,
            tip.top,
            tip.html,
        );
    }
}

fn hover_script() -> String {
    format!(
        r#"(function () {{
  var tooltip = document.getElementById("{TOOLTIP_ID}");
  document.querySelectorAll("rect.{BAR_CLASS}").forEach(function (bar) {{
    bar.addEventListener("mouseover", function (event) {{
      var date = bar.getAttribute("data-date");
      tooltip.style.opacity = 1;
      tooltip.style.left = (event.pageX + {OFFSET_X}) + "px";
      tooltip.style.top = (event.pageY + {OFFSET_Y}) + "px";
      tooltip.setAttribute("data-date", date);
      tooltip.replaceChildren(
        document.createTextNode("Date: " + date),
        document.createElement("br"),
        document.createTextNode("GDP: $" + bar.getAttribute("data-gdp") + " Billion")
      );
    }});
    bar.addEventListener("mouseout", function () {{
      tooltip.style.opacity = 0;
    }});
  }});
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn script_uses_pointer_offsets() {
        let s = hover_script();
        assert!(s.contains("event.pageX + 10"));
        assert!(s.contains("event.pageY + -20"));
        assert!(s.contains("getElementById(\"tooltip\")"));
        assert!(s.contains("tooltip.setAttribute(\"data-date\", date)"));
    }

    #[test]
    fn script_never_parses_data_as_markup() {
        let s = hover_script();
        assert!(!s.contains("innerHTML"));
        assert!(s.contains("document.createTextNode(\"Date: \" + date)"));
        assert!(s.contains("document.createElement(\"br\")"));
    }

    #[test]
    fn mouseout_only_hides() {
        let s = hover_script();
        let (_, out) = s.split_once("\"mouseout\"").expect("mouseout listener");
        let body = out.split_once('{').and_then(|(_, rest)| rest.split_once('}')).map(|(b, _)| b.trim());
        assert_eq!(body, Some("tooltip.style.opacity = 0;"));
    }
}
