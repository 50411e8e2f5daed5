use crate::utils::error::{RegroupError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegroupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegroupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegroupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The results directory name must be a single path component. A separator or
/// parent reference would let the output escape the root.
pub fn validate_dir_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(RegroupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a plain directory name without path separators".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("results_dir", "/tmp/results").is_ok());
        assert!(validate_path("results_dir", ".").is_ok());
        assert!(validate_path("results_dir", "").is_err());
        assert!(validate_path("results_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_dir_name() {
        assert!(validate_dir_name("results_name", "Results").is_ok());
        assert!(validate_dir_name("results_name", "out/put").is_err());
        assert!(validate_dir_name("results_name", "..").is_err());
        assert!(validate_dir_name("results_name", "  ").is_err());
    }
}
