use crate::core::dataset::CityDataset;
use crate::domain::model::CityRecord;
use crate::domain::ports::DatasetSource;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub dataset: Option<DatasetInfo>,
    #[serde(default)]
    pub cities: Vec<CityRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Toml,
    Csv,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(DatasetFormat::Toml),
            Some("csv") => Ok(DatasetFormat::Csv),
            _ => Err(CompareError::InvalidValue {
                field: "dataset".to_string(),
                value: path.display().to_string(),
                reason: "Unsupported file extension. Allowed extensions: toml, csv".to_string(),
            }),
        }
    }
}

impl DatasetFile {
    /// 從 TOML 字串解析城市資料
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CompareError::DatasetParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Header row must name the `CityRecord` fields.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let cities = csv_reader
            .deserialize::<CityRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            dataset: None,
            cities,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match DatasetFormat::from_path(path)? {
            DatasetFormat::Toml => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)
            }
            DatasetFormat::Csv => {
                let file = std::fs::File::open(path)?;
                Self::from_csv_reader(file)
            }
        }
    }

    /// Builds and validates the dataset.
    pub fn into_dataset(self) -> Result<CityDataset> {
        let dataset = CityDataset::new(self.cities)?;
        dataset.validate()?;
        Ok(dataset)
    }
}

/// Dataset read from a `.toml` or `.csv` file on disk.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDataset {
    fn describe(&self) -> String {
        format!("dataset file {}", self.path().display())
    }

    fn load(&self) -> Result<CityDataset> {
        let path = self.path();
        validate_path("dataset", &path.to_string_lossy())?;

        tracing::debug!("Reading dataset file: {}", path.display());
        let file = DatasetFile::from_file(path)?;
        if let Some(info) = &file.dataset {
            tracing::info!(
                "Dataset: {} {}",
                info.name,
                info.version.as_deref().unwrap_or("")
            );
            if let Some(description) = &info.description {
                tracing::debug!("Dataset description: {}", description);
            }
        }

        let dataset = file.into_dataset()?;
        tracing::info!("Loaded {} cities from {}", dataset.len(), path.display());
        Ok(dataset)
    }
}
