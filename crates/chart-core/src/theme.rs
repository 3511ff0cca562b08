// File: crates/chart-core/src/theme.rs
// Summary: Color presets shared by the HTML and raster presenters.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub title: Color,
    pub bar_fill: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    /// Navy bars on white with a light-gray tooltip.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::rgb(255, 255, 255),
            title: Color::rgb(0, 0, 0),
            bar_fill: Color::rgb(0, 0, 128),         // navy
            axis_line: Color::rgb(0, 0, 0),
            axis_label: Color::rgb(0, 0, 0),
            tooltip_background: Color::rgb(211, 211, 211), // lightgray
            tooltip_text: Color::rgb(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            title: Color::rgb(235, 235, 245),
            bar_fill: Color::rgb(96, 156, 255),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(210, 210, 220),
            tooltip_background: Color::rgb(40, 40, 45),
            tooltip_text: Color::rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("solarized").name, "classic");
    }
}
