use crate::domain::model::MatchType;
use crate::utils::error::{KeywordError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every name must parse as a [`MatchType`] and the selection must not be empty.
pub fn validate_match_types(names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(KeywordError::NoMatchTypes);
    }
    for name in names {
        name.parse::<MatchType>()?;
    }
    Ok(())
}

/// Exactly one of an inline term list or a term file may be given.
pub fn validate_term_source(
    field_name: &str,
    inline: Option<&[String]>,
    file: Option<&str>,
) -> Result<()> {
    match (inline, file) {
        (Some(_), Some(path)) => Err(KeywordError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "both inline terms and a file ('{}') were given, choose one",
                path
            ),
        }),
        (None, None) => Err(KeywordError::MissingConfigError {
            field: field_name.to_string(),
        }),
        (None, Some(path)) => validate_path(field_name, path),
        (Some(_), None) => Ok(()),
    }
}
