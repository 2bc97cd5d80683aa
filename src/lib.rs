pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::{OutputFormat, ReportSink};
pub use app::session::ComparisonSession;
pub use config::{builtin::BuiltinDataset, dataset_file::FileDataset};
pub use crate::core::{dataset::CityDataset, engine::compare};
pub use domain::model::{
    BreakdownRow, CityRecord, ComparisonInput, ComparisonResult, HousingTenure,
};
pub use domain::ports::{DatasetSource, ResultSink};
pub use utils::error::{CompareError, Result};
