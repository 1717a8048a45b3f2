use std::path::{Path, PathBuf};

use crate::models::WeatherRecord;

/// The classified, read-only weather table every aggregate reads from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<WeatherRecord>,
    source: Option<PathBuf>,
    status_derived: bool,
}

impl Dataset {
    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        Self {
            records,
            source: None,
            status_derived: true,
        }
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    pub(crate) fn with_status_derived(mut self, derived: bool) -> Self {
        self.status_derived = derived;
        self
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the table was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// False when the input already carried an `aqi_status` column.
    pub fn status_derived(&self) -> bool {
        self.status_derived
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
