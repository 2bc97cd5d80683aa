//! Cost comparison engine. Pure computation over an immutable dataset.

use crate::core::dataset::CityDataset;
use crate::domain::model::{
    BreakdownRow, CityRecord, ComparisonInput, ComparisonResult, HousingTenure,
};
use crate::utils::error::Result;

/// Share of gross income treated as cost-of-living-sensitive spend.
pub const SPEND_FRACTION: f64 = 0.65;

/// Applied to the housing breakdown row for homeowners.
pub const OWNER_HOUSING_MULTIPLIER: f64 = 1.2;

pub const MONTHS_PER_YEAR: f64 = 12.0;

pub fn housing_multiplier(tenure: HousingTenure) -> f64 {
    match tenure {
        HousingTenure::Owning => OWNER_HOUSING_MULTIPLIER,
        HousingTenure::Renting => 1.0,
    }
}

/// Compare two cities for the given salary and housing tenure.
///
/// Fails with `UnknownCity` when either id is missing and with
/// `DatasetIntegrity` when a resolved record carries a non-positive index.
/// Any salary is accepted; monetary outputs are whole currency units.
///
/// The housing multiplier only touches the housing breakdown row. Monthly
/// cost and required salary are derived from the overall index alone.
pub fn compare(dataset: &CityDataset, input: &ComparisonInput) -> Result<ComparisonResult> {
    let origin = dataset.resolve(&input.origin_city_id)?;
    let dest = dataset.resolve(&input.destination_city_id)?;

    // Guards every division by origin.cost_index below.
    origin.check_indices()?;
    dest.check_indices()?;

    // Kept unrounded so the sign survives differences below 0.05%.
    let percent_difference = (dest.cost_index - origin.cost_index) / origin.cost_index * 100.0;

    let salary = input.annual_salary;
    let base_monthly = salary / MONTHS_PER_YEAR;
    let origin_monthly_cost = monthly_spend(base_monthly, origin.cost_index);
    let destination_monthly_cost = monthly_spend(base_monthly, dest.cost_index);

    let required_salary = to_money(salary * dest.cost_index / origin.cost_index);
    let salary_adjustment = required_salary.saturating_sub(to_money(salary));

    let category_breakdown =
        build_breakdown(origin, dest, housing_multiplier(input.housing_tenure));

    tracing::debug!(
        origin = %origin.id,
        destination = %dest.id,
        tenure = %input.housing_tenure,
        percent_difference,
        required_salary,
        "comparison computed"
    );

    Ok(ComparisonResult {
        percent_difference,
        is_more_expensive: percent_difference > 0.0,
        origin_monthly_cost,
        destination_monthly_cost,
        required_salary,
        salary_adjustment,
        category_breakdown,
    })
}

fn monthly_spend(base_monthly: f64, cost_index: f64) -> i64 {
    to_money(base_monthly * cost_index / 100.0 * SPEND_FRACTION)
}

fn build_breakdown(origin: &CityRecord, dest: &CityRecord, multiplier: f64) -> Vec<BreakdownRow> {
    let row = |label: &str, origin_value: f64, destination_value: f64, is_total_row: bool| {
        BreakdownRow {
            label: label.to_string(),
            origin_value,
            destination_value,
            is_total_row,
        }
    };

    vec![
        row(
            "Housing",
            origin.housing_index * multiplier,
            dest.housing_index * multiplier,
            false,
        ),
        row("Utilities", origin.utilities_index, dest.utilities_index, false),
        row("Transportation", origin.transport_index, dest.transport_index, false),
        row("Groceries", origin.groceries_index, dest.groceries_index, false),
        row("Overall", origin.cost_index, dest.cost_index, true),
    ]
}

/// Nearest whole unit. `as` saturates, and maps NaN to 0.
fn to_money(value: f64) -> i64 {
    value.round() as i64
}
