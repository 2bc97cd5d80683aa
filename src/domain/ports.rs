use crate::core::dataset::CityDataset;
use crate::domain::model::{ComparisonInput, ComparisonResult};
use crate::utils::error::Result;

/// Anything that can produce a validated city dataset.
pub trait DatasetSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<CityDataset>;
}

/// Rendering boundary for recomputed comparisons.
pub trait ResultSink {
    fn publish(&mut self, input: &ComparisonInput, outcome: &Result<ComparisonResult>);
}
