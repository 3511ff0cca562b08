// File: crates/gdp-chart/src/settings.rs
// Summary: Layered settings: defaults, optional TOML file, GDP_CHART_* environment, CLI flags.

use std::path::{Path, PathBuf};

use gdp_chart_core::chart::TITLE;
use gdp_chart_core::types::{HEIGHT, PADDING, WIDTH};
use gdp_chart_core::Viewport;
use gdp_data_loader::DEFAULT_DATA_URL;
use serde::Deserialize;

use crate::Cli;

pub const ENV_PREFIX: &str = "GDP_CHART";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub theme: String,
    pub title: String,
    pub output_html: PathBuf,
    pub output_png: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            theme: "classic".to_string(),
            title: TITLE.to_string(),
            output_html: PathBuf::from("target/out/gdp_chart.html"),
            output_png: None,
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.padding)
    }

    /// CLI flags win over file and environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.data_url {
            self.data_url = url.clone();
        }
        if let Some(theme) = &cli.theme {
            self.theme = theme.clone();
        }
        if let Some(out) = &cli.output {
            self.output_html = out.clone();
        }
        if let Some(png) = &cli.png {
            self.output_png = Some(png.clone());
        }
        self
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Load settings from `path` (may be absent) and the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    Ok(layered(path, environment())?)
}

/// File first, then `env` on top of it.
fn layered(path: &Path, env: config::Environment) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn temp_toml(name: &str, body: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gdp-chart-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let s = load_settings(Path::new("no/such/gdp-chart.toml")).unwrap();
        assert_eq!(s.viewport(), Viewport::new(800, 400, 40));
        assert_eq!(s.data_url, DEFAULT_DATA_URL);
        assert_eq!(s.output_png, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_toml(
            "partial.toml",
            "width = 1024\npadding = 60\ntheme = \"dark\"\noutput_png = \"out/gdp.png\"\n",
        );
        let s = load_settings(&path).unwrap();
        assert_eq!(s.width, 1024);
        assert_eq!(s.height, 400);
        assert_eq!(s.padding, 60);
        assert_eq!(s.theme, "dark");
        assert_eq!(s.output_png, Some(PathBuf::from("out/gdp.png")));
    }

    fn fake_env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn prefixed_env_maps_onto_keys() {
        let env = fake_env(&[
            ("GDP_CHART_DATA_URL", "x.json"),
            ("GDP_CHART_WIDTH", "1024"),
            ("GDP_CHART_TITLE", "2024"),
            ("GDP_CHART_OUTPUT_PNG", "o.png"),
            ("OTHER_WIDTH", "5"),
        ]);
        let s = layered(Path::new("no/such/gdp-chart.toml"), env).unwrap();
        assert_eq!(s.data_url, "x.json");
        assert_eq!(s.width, 1024);
        assert_eq!(s.title, "2024");
        assert_eq!(s.output_png, Some(PathBuf::from("o.png")));
        assert_eq!(s.height, 400);
    }

    #[test]
    fn env_beats_file_and_cli_beats_env() {
        let path = temp_toml("layered.toml", "width = 1024\ntheme = \"dark\"\ndata_url = \"file.json\"\n");
        let env = fake_env(&[("GDP_CHART_WIDTH", "640"), ("GDP_CHART_DATA_URL", "env.json")]);
        let s = layered(&path, env).unwrap();
        assert_eq!(s.width, 640);
        assert_eq!(s.data_url, "env.json");
        assert_eq!(s.theme, "dark");

        let cli = Cli::parse_from(["gdp-chart", "--data-url", "cli.json"]);
        let s = s.with_overrides(&cli);
        assert_eq!(s.data_url, "cli.json");
        assert_eq!(s.width, 640);
    }

    #[test]
    fn cli_flags_win() {
        let cli = Cli::parse_from(["gdp-chart", "--data-url", "data/GDP-data.json", "--png", "gdp.png"]);
        let s = Settings::default().with_overrides(&cli);
        assert_eq!(s.data_url, "data/GDP-data.json");
        assert_eq!(s.output_png, Some(PathBuf::from("gdp.png")));
        assert_eq!(s.output_html, PathBuf::from("target/out/gdp_chart.html"));
    }
}
