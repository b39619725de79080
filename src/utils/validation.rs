use crate::utils::error::{BaziError, Result};
use chrono::NaiveDateTime;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a birth or solar-term timestamp, accepting the few formats the
/// CLI and chart files use.
pub fn parse_datetime(field_name: &str, value: &str) -> Result<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    Err(BaziError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("expected a datetime like {}", DATETIME_FORMATS[0]),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BaziError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BaziError::MissingConfig {
        field: field_name.to_string(),
    })
}
