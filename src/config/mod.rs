pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, UnlabeledPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_dir_name, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

const DEFAULT_ROOT_DIR: &str = ".";
const DEFAULT_RESULTS_NAME: &str = "Results";

/// The three mergeable settings stay `Option` so the TOML merge can tell
/// "not given on the command line" apart from "given with the default value";
/// defaults are applied by the accessors.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv-regroup")]
#[command(about = "Regroups CSV result files into per-label directories of .txt copies")]
pub struct CliConfig {
    /// Root directory to scan; the Results tree is created inside it [default: .]
    #[arg(short = 'r', long = "results-dir", visible_alias = "resultsDir")]
    pub results_dir: Option<String>,

    /// Name of the output directory recreated on each run [default: Results]
    #[arg(long)]
    pub results_name: Option<String>,

    /// What to do with filenames lacking a _<label>.csv tail [default: skip]
    #[arg(long)]
    pub on_unlabeled: Option<UnlabeledPolicy>,

    #[arg(long, help = "Plan the copies without touching the filesystem")]
    pub dry_run: bool,

    #[arg(long, help = "Print a JSON run summary to stdout")]
    pub summary: bool,

    #[arg(long, help = "Optional TOML config file; explicit flags win")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Folds an optional TOML file into the CLI values. A file value only
    /// fills settings absent from the command line, so anything given
    /// explicitly wins even when it spells out a default.
    pub fn resolve(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        tracing::debug!("Loading config file {}", path);
        let file = toml_config::TomlConfig::from_file(&path)?;

        if self.results_dir.is_none() {
            self.results_dir = file.regroup.root_dir;
        }
        if self.results_name.is_none() {
            self.results_name = file.regroup.results_name;
        }
        if self.on_unlabeled.is_none() {
            self.on_unlabeled = file.regroup.on_unlabeled;
        }

        Ok(self)
    }
}

impl ConfigProvider for CliConfig {
    fn root_dir(&self) -> &str {
        self.results_dir.as_deref().unwrap_or(DEFAULT_ROOT_DIR)
    }

    fn results_dir_name(&self) -> &str {
        self.results_name.as_deref().unwrap_or(DEFAULT_RESULTS_NAME)
    }

    fn on_unlabeled(&self) -> UnlabeledPolicy {
        self.on_unlabeled.unwrap_or(UnlabeledPolicy::Skip)
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("results_dir", self.root_dir())?;
        validate_dir_name("results_name", self.results_dir_name())?;
        Ok(())
    }
}
