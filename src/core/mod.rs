pub mod dataset;
pub mod engine;

pub use crate::domain::model::{
    BreakdownRow, CityRecord, ComparisonInput, ComparisonResult, HousingTenure,
};
pub use crate::domain::ports::{DatasetSource, ResultSink};
pub use crate::utils::error::Result;
