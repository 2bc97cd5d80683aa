use crate::config::dataset_file::DatasetFile;
use crate::core::dataset::CityDataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;

/// The dataset shipped inside the binary.
pub const BUILTIN_CITIES_TOML: &str = include_str!("../../data/cities.toml");

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDataset;

impl DatasetSource for BuiltinDataset {
    fn describe(&self) -> String {
        "built-in dataset".to_string()
    }

    fn load(&self) -> Result<CityDataset> {
        let dataset = DatasetFile::from_toml_str(BUILTIN_CITIES_TOML)?.into_dataset()?;
        tracing::debug!("Loaded {} built-in cities", dataset.len());
        Ok(dataset)
    }
}
