use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Unknown city: {id}")]
    UnknownCity { id: String },

    #[error("Dataset integrity violated for '{city}': {field} = {value}")]
    DatasetIntegrity {
        city: String,
        field: String,
        value: f64,
    },

    #[error("Duplicate city id in dataset: {id}")]
    DuplicateCity { id: String },

    #[error("Dataset contains no cities")]
    EmptyDataset,

    #[error("Dataset parse error: {message}")]
    DatasetParse { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required value: {field}")]
    MissingValue { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Dataset,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::UnknownCity { .. }
            | CompareError::InvalidValue { .. }
            | CompareError::MissingValue { .. } => ErrorCategory::Input,
            CompareError::DatasetIntegrity { .. }
            | CompareError::DuplicateCity { .. }
            | CompareError::EmptyDataset
            | CompareError::DatasetParse { .. }
            | CompareError::Csv(_) => ErrorCategory::Dataset,
            CompareError::Io(_) | CompareError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Dataset => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::UnknownCity { id } => {
                format!("City '{}' is not in the dataset", id)
            }
            CompareError::DatasetIntegrity { city, field, .. } => {
                format!("City '{}' has an invalid {} in the dataset", city, field)
            }
            CompareError::DuplicateCity { id } => {
                format!("City '{}' appears more than once in the dataset", id)
            }
            CompareError::EmptyDataset => "The dataset does not contain any cities".to_string(),
            CompareError::DatasetParse { .. } | CompareError::Csv(_) => {
                "The dataset file could not be read".to_string()
            }
            CompareError::InvalidValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            CompareError::MissingValue { field } => format!("Missing {}", field),
            CompareError::Io(e) => format!("File access failed: {}", e),
            CompareError::Serialization(_) => "Could not render the result".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CompareError::UnknownCity { .. } => {
                "Run with --list-cities to see the available city ids"
            }
            CompareError::DatasetIntegrity { .. } => {
                "Every index in the dataset must be a positive number"
            }
            CompareError::DuplicateCity { .. } => "Give every city a unique id",
            CompareError::EmptyDataset => "Add at least one city to the dataset",
            CompareError::DatasetParse { .. } | CompareError::Csv(_) => {
                "Check the dataset file format (TOML [[cities]] tables or CSV with a header row)"
            }
            CompareError::InvalidValue { .. } | CompareError::MissingValue { .. } => {
                "Check the command line arguments with --help"
            }
            CompareError::Io(_) => "Check that the file exists and is readable",
            CompareError::Serialization(_) => "Try the text output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
