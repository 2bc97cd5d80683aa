use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::CompareError;

/// One city with its cost indices (US average = 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: String,
    pub display_name: String,
    pub cost_index: f64,
    pub housing_index: f64,
    pub utilities_index: f64,
    pub transport_index: f64,
    pub groceries_index: f64,
}

impl CityRecord {
    /// Index fields paired with their names, overall index first.
    pub fn indices(&self) -> [(&'static str, f64); 5] {
        [
            ("cost_index", self.cost_index),
            ("housing_index", self.housing_index),
            ("utilities_index", self.utilities_index),
            ("transport_index", self.transport_index),
            ("groceries_index", self.groceries_index),
        ]
    }

    /// Fails on the first index that is zero, negative or not finite.
    pub fn check_indices(&self) -> Result<(), CompareError> {
        for (field, value) in self.indices() {
            if !value.is_finite() || value <= 0.0 {
                return Err(CompareError::DatasetIntegrity {
                    city: self.id.clone(),
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingTenure {
    #[default]
    Renting,
    Owning,
}

impl HousingTenure {
    pub fn as_str(&self) -> &'static str {
        match self {
            HousingTenure::Renting => "renting",
            HousingTenure::Owning => "owning",
        }
    }
}

impl fmt::Display for HousingTenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HousingTenure {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "renting" | "rent" => Ok(HousingTenure::Renting),
            "owning" | "own" => Ok(HousingTenure::Owning),
            other => Err(CompareError::InvalidValue {
                field: "housing".to_string(),
                value: other.to_string(),
                reason: "expected 'renting' or 'owning'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub origin_city_id: String,
    pub destination_city_id: String,
    pub annual_salary: f64,
    pub housing_tenure: HousingTenure,
}

impl ComparisonInput {
    pub fn new(
        origin_city_id: impl Into<String>,
        destination_city_id: impl Into<String>,
        annual_salary: f64,
        housing_tenure: HousingTenure,
    ) -> Self {
        Self {
            origin_city_id: origin_city_id.into(),
            destination_city_id: destination_city_id.into(),
            annual_salary,
            housing_tenure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub origin_value: f64,
    pub destination_value: f64,
    pub is_total_row: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Signed and unrounded. Positive means the destination costs more.
    /// Serialized with one decimal place.
    #[serde(serialize_with = "serialize_tenth")]
    pub percent_difference: f64,
    pub is_more_expensive: bool,
    pub origin_monthly_cost: i64,
    pub destination_monthly_cost: i64,
    pub required_salary: i64,
    pub salary_adjustment: i64,
    pub category_breakdown: Vec<BreakdownRow>,
}

impl ComparisonResult {
    /// Percentage as displayed: one decimal place.
    pub fn display_percent(&self) -> f64 {
        round_to_tenth(self.percent_difference)
    }

    pub fn total_row(&self) -> Option<&BreakdownRow> {
        self.category_breakdown.iter().find(|row| row.is_total_row)
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // Avoid reporting -0.0 for tiny negative differences.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn serialize_tenth<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to_tenth(*value))
}
