use crate::core::dataset::CityDataset;
use crate::core::engine::compare;
use crate::domain::model::{ComparisonInput, ComparisonResult, HousingTenure};
use crate::domain::ports::ResultSink;
use crate::utils::error::Result;
use std::sync::Arc;

/// Holds the current input and republishes a fresh comparison after every
/// change. Nothing is cached between inputs.
pub struct ComparisonSession<S: ResultSink> {
    dataset: Arc<CityDataset>,
    input: ComparisonInput,
    current: Result<ComparisonResult>,
    sink: S,
}

impl<S: ResultSink> ComparisonSession<S> {
    /// Computes and publishes the initial comparison.
    pub fn new(dataset: Arc<CityDataset>, input: ComparisonInput, sink: S) -> Self {
        let current = compare(&dataset, &input);
        let mut session = Self {
            dataset,
            input,
            current,
            sink,
        };
        session.sink.publish(&session.input, &session.current);
        session
    }

    pub fn input(&self) -> &ComparisonInput {
        &self.input
    }

    pub fn current(&self) -> &Result<ComparisonResult> {
        &self.current
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn set_origin(&mut self, city_id: impl Into<String>) -> &Result<ComparisonResult> {
        self.input.origin_city_id = city_id.into();
        self.refresh()
    }

    pub fn set_destination(&mut self, city_id: impl Into<String>) -> &Result<ComparisonResult> {
        self.input.destination_city_id = city_id.into();
        self.refresh()
    }

    pub fn set_salary(&mut self, annual_salary: f64) -> &Result<ComparisonResult> {
        self.input.annual_salary = annual_salary;
        self.refresh()
    }

    pub fn set_housing_tenure(&mut self, tenure: HousingTenure) -> &Result<ComparisonResult> {
        self.input.housing_tenure = tenure;
        self.refresh()
    }

    pub fn swap_cities(&mut self) -> &Result<ComparisonResult> {
        std::mem::swap(
            &mut self.input.origin_city_id,
            &mut self.input.destination_city_id,
        );
        self.refresh()
    }

    fn refresh(&mut self) -> &Result<ComparisonResult> {
        tracing::debug!(
            "Recomputing {} -> {}",
            self.input.origin_city_id,
            self.input.destination_city_id
        );
        self.current = compare(&self.dataset, &self.input);
        self.sink.publish(&self.input, &self.current);
        &self.current
    }
}
