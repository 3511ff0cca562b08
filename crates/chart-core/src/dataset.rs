// File: crates/chart-core/src/dataset.rs
// Summary: GDP record and dataset model with extent helpers used by the scales.
// Notes:
// - Records are kept in source order; nothing here sorts.

use chrono::NaiveDate;

/// One observation: a calendar date and the GDP value (billions) for it.
#[derive(Clone, Debug, PartialEq)]
pub struct GdpRecord {
    pub date: NaiveDate,
    /// Date string exactly as delivered by the source.
    pub raw_date: String,
    pub value: f64,
}

impl GdpRecord {
    pub fn new(date: NaiveDate, raw_date: impl Into<String>, value: f64) -> Self {
        Self { date, raw_date: raw_date.into(), value }
    }

    /// Build a record from a `YYYY-MM-DD` string.
    pub fn parse(raw_date: &str, value: f64) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")?;
        Ok(Self::new(date, raw_date, value))
    }

    /// Value as written into `data-gdp`: shortest round-trip form, no rounding.
    pub fn gdp_attr(&self) -> String {
        self.value.to_string()
    }
}

/// Optional descriptive fields that travel with the dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetMeta {
    pub name: Option<String>,
    pub source_name: Option<String>,
    pub description: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<GdpRecord>,
    pub meta: DatasetMeta,
}

impl Dataset {
    pub fn new(records: Vec<GdpRecord>) -> Self {
        Self { records, meta: DatasetMeta::default() }
    }

    pub fn with_meta(mut self, meta: DatasetMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn records(&self) -> &[GdpRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GdpRecord> {
        self.records.iter()
    }

    /// Earliest and latest date, scanning every record.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut it = self.records.iter().map(|r| r.date);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Smallest and largest finite value.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for r in self.records.iter().filter(|r| r.value.is_finite()) {
            lo = lo.min(r.value);
            hi = hi.max(r.value);
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }
}

impl FromIterator<GdpRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = GdpRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a GdpRecord;
    type IntoIter = std::slice::Iter<'a, GdpRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
