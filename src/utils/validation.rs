use crate::utils::error::{CompareError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const CITY_ID_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// City ids are lowercase slugs such as `new-york`.
pub fn validate_city_id(field_name: &str, id: &str) -> Result<()> {
    let re = Regex::new(CITY_ID_PATTERN).map_err(|e| CompareError::InvalidValue {
        field: field_name.to_string(),
        value: id.to_string(),
        reason: format!("id pattern failed to compile: {}", e),
    })?;

    if !re.is_match(id) {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "City id must be a lowercase slug (letters, digits, single hyphens)"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CompareError::MissingValue {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CompareError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
