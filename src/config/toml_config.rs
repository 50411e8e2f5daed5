use crate::core::UnlabeledPolicy;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// File-based counterpart of the CLI flags:
///
/// ```toml
/// [regroup]
/// root_dir = "/data/experiments"
/// results_name = "Results"
/// on_unlabeled = "skip"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub regroup: RegroupSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegroupSection {
    pub root_dir: Option<String>,
    pub results_name: Option<String>,
    pub on_unlabeled: Option<UnlabeledPolicy>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_section() {
        let config: TomlConfig = toml::from_str(
            r#"
            [regroup]
            root_dir = "/data/experiments"
            results_name = "Out"
            on_unlabeled = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.regroup.root_dir.as_deref(), Some("/data/experiments"));
        assert_eq!(config.regroup.results_name.as_deref(), Some("Out"));
        assert_eq!(config.regroup.on_unlabeled, Some(UnlabeledPolicy::Fail));
    }

    #[test]
    fn test_parse_partial_section() {
        let config: TomlConfig = toml::from_str("[regroup]\nroot_dir = \"/data\"\n").unwrap();
        assert_eq!(config.regroup.root_dir.as_deref(), Some("/data"));
        assert!(config.regroup.results_name.is_none());
        assert!(config.regroup.on_unlabeled.is_none());
    }
}
