use crate::app::report::OutputFormat;
use crate::config::builtin::BuiltinDataset;
use crate::config::dataset_file::FileDataset;
use crate::domain::model::{ComparisonInput, HousingTenure};
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_path, validate_range,
    validate_required_field, Validate,
};
use clap::Parser;

pub const MIN_SALARY: f64 = 0.0;
pub const MAX_SALARY: f64 = 10_000_000.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "colcompare")]
#[command(about = "Compare cost of living between two cities and estimate a break-even salary")]
pub struct CliConfig {
    /// City you live in now (dataset id, e.g. chicago)
    #[arg(long)]
    pub from: Option<String>,

    /// City you are considering (dataset id, e.g. austin)
    #[arg(long)]
    pub to: Option<String>,

    /// Current annual salary
    #[arg(long, default_value = "75000", allow_negative_numbers = true)]
    pub salary: f64,

    /// Housing tenure: renting or owning
    #[arg(long, default_value = "renting")]
    pub housing: HousingTenure,

    /// Dataset file (.toml or .csv) replacing the built-in table
    #[arg(long)]
    pub dataset: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the available cities and exit
    #[arg(long)]
    pub list_cities: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn dataset_source(&self) -> Box<dyn DatasetSource> {
        match &self.dataset {
            Some(path) => Box::new(FileDataset::new(path)),
            None => Box::new(BuiltinDataset),
        }
    }

    /// Comparison input from the validated arguments.
    pub fn to_input(&self) -> Result<ComparisonInput> {
        let origin = validate_required_field("from", &self.from)?;
        let destination = validate_required_field("to", &self.to)?;
        Ok(ComparisonInput::new(
            origin.trim(),
            destination.trim(),
            self.salary,
            self.housing,
        ))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.dataset {
            validate_path("dataset", path)?;
        }

        if self.list_cities {
            return Ok(());
        }

        validate_non_empty_string("from", validate_required_field("from", &self.from)?)?;
        validate_non_empty_string("to", validate_required_field("to", &self.to)?)?;
        validate_finite("salary", self.salary)?;
        validate_range("salary", self.salary, MIN_SALARY, MAX_SALARY)?;

        Ok(())
    }
}
