use crate::error::DataLoadError;
use crate::models::Dataset;
use crate::readers::WeatherReader;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Caller-held handle that loads the dataset on first use and hands out the
/// same table afterwards. Failed loads are not cached.
pub struct DatasetCache {
    path: PathBuf,
    reader: WeatherReader,
    dataset: OnceCell<Dataset>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_reader(path, WeatherReader::new())
    }

    pub fn with_reader(path: impl Into<PathBuf>, reader: WeatherReader) -> Self {
        Self {
            path: path.into(),
            reader,
            dataset: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn get(&self) -> Result<&Dataset, DataLoadError> {
        if let Some(dataset) = self.dataset.get() {
            debug!(path = %self.path.display(), "Reusing cached dataset");
            return Ok(dataset);
        }

        let dataset = self.reader.read_dataset(&self.path)?;
        Ok(self.dataset.get_or_init(|| dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_second_get_does_not_reread_file() -> Result<(), DataLoadError> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide"
        )?;
        writeln!(temp_file, "X,clear,20,50,40,300")?;

        let cache = DatasetCache::new(temp_file.path());
        assert!(!cache.is_loaded());
        let first = cache.get()?;
        assert_eq!(first.len(), 1);

        // Appending after the first load must not change the cached table.
        writeln!(temp_file, "Y,rain,30,60,200,500")?;
        temp_file.flush()?;

        let second = cache.get()?;
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.len(), 1);
        Ok(())
    }

    #[test]
    fn test_failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GlobalWeatherRepository.csv");
        let cache = DatasetCache::new(&path);

        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());

        std::fs::write(
            &path,
            "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide\nX,clear,20,50,40,300\n",
        )
        .unwrap();

        assert_eq!(cache.get().unwrap().len(), 1);
        assert!(cache.is_loaded());
    }
}
