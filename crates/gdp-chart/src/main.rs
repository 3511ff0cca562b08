// File: crates/gdp-chart/src/main.rs
// Summary: Fetches the GDP dataset once and writes the bar chart as HTML (and optionally PNG).

mod settings;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gdp_chart_core::{theme, ChartRenderer, HtmlDocument};
use gdp_chart_render_skia::{render_png, RasterOptions};
use gdp_data_loader::DataLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::settings::load_settings;

const DEFAULT_FILTER: &str = "gdp_chart=info,gdp_chart_core=info,gdp_data_loader=info";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Settings file (TOML); missing is fine
    #[arg(short, long, default_value = "gdp-chart.toml")]
    pub config: PathBuf,

    /// Dataset location: http(s) URL or local JSON file
    #[arg(long)]
    pub data_url: Option<String>,

    /// Theme preset (classic, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Where to write the HTML page
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a PNG snapshot here
    #[arg(long)]
    pub png: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with_target(true)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "gdp chart failed; nothing rendered");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?
        .with_overrides(&cli);

    let dataset = DataLoader::new(&settings.data_url)
        .load()
        .await
        .with_context(|| format!("fetching {}", settings.data_url))?;

    let theme = theme::find(&settings.theme);
    let renderer = ChartRenderer::new(settings.viewport())
        .with_theme(theme)
        .with_title(settings.title.as_str());

    // Render everything before touching the filesystem, so a failure leaves no partial output.
    let mut doc = HtmlDocument::new(theme);
    renderer.render(&dataset, &mut doc).context("rendering chart")?;
    let html = doc.finish();
    let png = match &settings.output_png {
        Some(path) => {
            let bytes = render_png(&renderer, &dataset, RasterOptions { theme, ..RasterOptions::default() })
                .context("rendering PNG snapshot")?;
            Some((path, bytes))
        }
        None => None,
    };

    write_output(&settings.output_html, html.as_bytes())?;
    info!(path = %settings.output_html.display(), bars = dataset.len(), "wrote chart page");
    if let Some((path, bytes)) = png {
        write_output(path, &bytes)?;
        info!(path = %path.display(), "wrote PNG snapshot");
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
