use crate::utils::error::RegroupError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A discovered CSV result file. `file_name` is kept separately because all
/// grouping decisions are made on the filename, never on the full path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl CsvFile {
    /// Returns `None` for paths whose final component is missing or not
    /// valid UTF-8; those files cannot be grouped by name.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self { path, file_name })
    }
}

/// One planned copy: `source` lands in `<results>/<label>/<dest_name>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedCopy {
    pub source: PathBuf,
    pub label: String,
    pub dest_name: String,
}

/// Output of the transform stage: the copies to perform plus the filenames
/// that could not be labeled (when the skip policy is active).
#[derive(Debug, Clone, Default)]
pub struct RegroupPlan {
    pub copies: Vec<PlannedCopy>,
    pub skipped: Vec<String>,
}

/// What a run did, suitable for the `--summary` JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub results_dir: String,
    pub copied: usize,
    pub skipped: usize,
    pub groups: BTreeMap<String, usize>,
    pub dry_run: bool,
}

/// Policy for filenames without a `_<label>.csv` tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlabeledPolicy {
    /// Leave the file out of the plan and warn.
    Skip,
    /// Abort the run on the first unlabeled file.
    Fail,
}

impl FromStr for UnlabeledPolicy {
    type Err = RegroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(RegroupError::InvalidConfigValueError {
                field: "on_unlabeled".to_string(),
                value: other.to_string(),
                reason: "expected 'skip' or 'fail'".to_string(),
            }),
        }
    }
}

impl fmt::Display for UnlabeledPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_file_from_path() {
        let file = CsvFile::from_path(PathBuf::from("/data/run_abc_GROUP1.csv")).unwrap();
        assert_eq!(file.file_name, "run_abc_GROUP1.csv");
    }

    #[test]
    fn test_unlabeled_policy_from_str() {
        assert_eq!("skip".parse::<UnlabeledPolicy>().unwrap(), UnlabeledPolicy::Skip);
        assert_eq!("FAIL".parse::<UnlabeledPolicy>().unwrap(), UnlabeledPolicy::Fail);
        assert!("ignore".parse::<UnlabeledPolicy>().is_err());
    }
}
