// File: crates/data-loader/src/payload.rs
// Summary: Wire shape of the GDP document and its conversion into the chart dataset.

use chrono::{DateTime, NaiveDate};
use gdp_chart_core::{Dataset, DatasetMeta, GdpRecord};
use serde::Deserialize;

use crate::error::FetchError;

/// The source document. Only `data` is required; the rest is descriptive.
#[derive(Debug, Deserialize)]
pub struct GdpPayload {
    /// `[dateString, value]` pairs in source order.
    pub data: Vec<(String, f64)>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc().date()))
}

impl GdpPayload {
    pub fn into_dataset(self) -> Result<Dataset, FetchError> {
        let records = self
            .data
            .into_iter()
            .enumerate()
            .map(|(index, (raw, value))| match parse_date(&raw) {
                Some(date) => Ok(GdpRecord::new(date, raw, value)),
                None => Err(FetchError::InvalidDate { index, value: raw }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let meta = DatasetMeta {
            name: self.name,
            source_name: self.source_name,
            description: self.description,
            from_date: self.from_date,
            to_date: self.to_date,
        };
        Ok(Dataset::new(records).with_meta(meta))
    }
}

/// Decode a response body into a dataset.
pub fn decode(bytes: &[u8]) -> Result<Dataset, FetchError> {
    let payload: GdpPayload = serde_json::from_slice(bytes)?;
    payload.into_dataset()
}
