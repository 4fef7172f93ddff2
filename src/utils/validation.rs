use crate::utils::error::{CarpoolError, Result};
use std::fmt::Display;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(CarpoolError::InvalidConfig {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.to_string_lossy().contains('\0') {
        return Err(CarpoolError::InvalidConfig {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or(CarpoolError::MissingArgument)
}

/// Parses one integer token. The error is a short reason suitable for the
/// loader's error variants.
pub fn parse_integer(field_name: &str, token: &str) -> std::result::Result<i64, String> {
    token
        .parse::<i64>()
        .map_err(|_| format!("{} {:?} is not an integer", field_name, token))
}

/// Checks `min <= value <= max`, returning the reason on failure.
pub fn check_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> std::result::Result<T, String> {
    if value < min || value > max {
        return Err(format!(
            "{} {} is outside {}..={}",
            field_name, value, min, max
        ));
    }
    Ok(value)
}

/// Checks `value >= min`, returning the reason on failure.
pub fn check_at_least<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> std::result::Result<T, String> {
    if value < min {
        return Err(format!("{} {} must be at least {}", field_name, value, min));
    }
    Ok(value)
}
