// File: crates/data-loader/src/loader.rs
// Summary: Single-shot dataset fetch over HTTP (or from a local file); no retry, no timeout.

use std::path::PathBuf;

use gdp_chart_core::Dataset;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::payload::decode;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Http(String),
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` locations are fetched; anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let lower = location.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Http(location.trim().to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Http(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct DataLoader {
    client: Client,
    source: Source,
}

impl DataLoader {
    pub fn new(location: &str) -> Self {
        Self::with_client(Client::new(), location)
    }

    pub fn with_client(client: Client, location: &str) -> Self {
        Self { client, source: Source::parse(location) }
    }

    /// Fetch and decode the dataset once.
    pub async fn load(&self) -> Result<Dataset, FetchError> {
        info!(source = %self.source, "loading dataset");
        let body = match &self.source {
            Source::Http(url) => self.fetch(url).await?,
            Source::File(path) => tokio::fs::read(path)
                .await
                .map_err(|source| FetchError::Io { path: path.clone(), source })?,
        };
        debug!(bytes = body.len(), "payload received");

        let ds = decode(&body)?;
        info!(
            records = ds.len(),
            name = ds.meta.name.as_deref().unwrap_or("-"),
            source_name = ds.meta.source_name.as_deref().unwrap_or("-"),
            "dataset loaded"
        );
        if let (Some(from), Some(to)) = (&ds.meta.from_date, &ds.meta.to_date) {
            debug!(%from, %to, "declared date range");
        }
        Ok(ds)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Load from `location` with a default client.
pub async fn load(location: &str) -> Result<Dataset, FetchError> {
    DataLoader::new(location).load().await
}
