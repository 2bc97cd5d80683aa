use crate::domain::model::CityRecord;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_city_id, validate_non_empty_string, Validate};
use std::collections::HashMap;

/// Immutable id -> record table. Insertion order is preserved for listing.
#[derive(Debug, Clone, Default)]
pub struct CityDataset {
    records: Vec<CityRecord>,
    by_id: HashMap<String, usize>,
}

impl CityDataset {
    /// Builds the table, rejecting duplicate ids. Index values are checked by
    /// [`Validate::validate`], which every loader runs before handing out a dataset.
    pub fn new(records: Vec<CityRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(CompareError::DuplicateCity {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&CityRecord> {
        self.by_id.get(id).map(|&position| &self.records[position])
    }

    pub fn resolve(&self, id: &str) -> Result<&CityRecord> {
        self.get(id).ok_or_else(|| CompareError::UnknownCity { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Validate for CityDataset {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CompareError::EmptyDataset);
        }

        for record in &self.records {
            validate_city_id("cities.id", &record.id)?;
            validate_non_empty_string("cities.display_name", &record.display_name)?;
            record.check_indices()?;
        }

        Ok(())
    }
}
