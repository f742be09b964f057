//! CLI Tooling
//!
//! Reads a transcript file, runs the analysis, and formats the result. With
//! default arguments the output is the selected directory size alone.

use crate::analysis::Analysis;
use crate::config::{ConfigLoader, SweepConfig, CONFIG_FILE_NAME};
use crate::error::SweepError;
use crate::tree::render_tree;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dirsweep CLI - smallest directory to delete for a pending update
#[derive(Parser, Debug, Clone)]
#[command(name = "dirsweep")]
#[command(about = "Rebuild a directory tree from a shell transcript and pick a directory to delete")]
pub struct Cli {
    /// Transcript file to analyze
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Configuration file path (overrides dirsweep.toml lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Print the reconstructed directory tree before the result (text format only)
    #[arg(long)]
    pub tree: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Resolved configuration plus the directory relative paths are read from
pub struct CliContext {
    config: SweepConfig,
    config_source: Option<PathBuf>,
    base_dir: PathBuf,
}

impl CliContext {
    /// Load configuration: `config_path` if given, otherwise `dirsweep.toml`
    /// in `base_dir` when it exists, otherwise defaults.
    pub fn new(config_path: Option<PathBuf>, base_dir: PathBuf) -> Result<Self, SweepError> {
        let (config, config_source) = match config_path {
            Some(path) => {
                let path = base_dir.join(path);
                (ConfigLoader::load_from_file(&path)?, Some(path))
            }
            None => {
                let workspace_file = base_dir.join(CONFIG_FILE_NAME);
                let source = workspace_file.is_file().then_some(workspace_file);
                (ConfigLoader::load(&base_dir)?, source)
            }
        };
        Ok(Self {
            config,
            config_source,
            base_dir,
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// File the configuration was read from; `None` when only defaults apply.
    pub fn config_source(&self) -> Option<&Path> {
        self.config_source.as_deref()
    }

    /// Run the analysis described by `cli` and return the text to print.
    pub fn execute(&self, cli: &Cli) -> Result<String, SweepError> {
        let json = match cli.format.as_str() {
            "text" => false,
            "json" => true,
            other => {
                return Err(SweepError::Config(format!(
                    "Invalid output format: {} (must be 'text' or 'json')",
                    other
                )))
            }
        };
        if json && cli.tree {
            return Err(SweepError::Config(
                "--tree cannot be combined with --format json".to_string(),
            ));
        }

        let text = self.read_transcript(&cli.input)?;
        let analysis = Analysis::from_transcript(&text)?;
        let report = analysis.report(&self.config.disk)?;
        info!(
            input = %cli.input.display(),
            directories = report.directory_count,
            selected = report.plan.selected_size,
            "analysis complete"
        );

        if json {
            return Ok(serde_json::to_string_pretty(&report)?);
        }

        let mut out = String::new();
        if cli.tree {
            out.push_str(&render_tree(&analysis.tree));
        }
        out.push_str(&report.plan.selected_size.to_string());
        Ok(out)
    }

    fn read_transcript(&self, input: &Path) -> Result<String, SweepError> {
        let path = self.base_dir.join(input);
        std::fs::read_to_string(&path).map_err(|e| SweepError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
