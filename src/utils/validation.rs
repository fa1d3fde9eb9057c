use crate::utils::error::{CleanError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Structural email check: local part of word chars/dot/hyphen, "@", a domain
/// of the same class, and a final dot-separated word segment. A purely numeric
/// value like "123@45.67" matches `\w` and therefore passes; this mirrors the
/// upstream export's validation rule and is kept as-is.
pub fn is_valid_email(value: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern compiles"));
    re.is_match(value)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
