use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    selector::candidates::SelectorStrategy, snapshot::snapshot_model::DataKeyForm,
    workbench::analysis::AnalysisOptions,
};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "trackdiff",
    version,
    about = "Derive toggle-button tracking selectors by diffing on/off HTML snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: trackdiff.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append JSONL trace events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Diff the on and off snapshots and list selector candidates
    Diff {
        #[command(flatten)]
        pair: PairArgs,

        /// Output format: text, json, yaml
        #[arg(long)]
        format: Option<String>,
    },

    /// Parse a single fragment and print its extracted attributes
    Snapshot {
        /// File holding the HTML fragment
        #[arg(long)]
        markup: String,

        /// Data key form: dataset or attribute
        #[arg(long)]
        key_form: Option<String>,

        /// Output format: json, yaml
        #[arg(long)]
        format: Option<String>,
    },

    /// Replay form edits from a YAML file and print the resulting draft
    Draft {
        #[command(flatten)]
        pair: PairArgs,

        /// YAML list of draft events
        #[arg(long)]
        events: Option<String>,

        /// Output format: json, yaml
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct PairArgs {
    /// File holding the on (favorited) HTML fragment
    #[arg(long)]
    pub on: String,

    /// File holding the off HTML fragment
    #[arg(long)]
    pub off: String,

    /// Selector strategy: simple or paired
    #[arg(long)]
    pub strategy: Option<String>,

    /// Data key form: dataset or attribute
    #[arg(long)]
    pub key_form: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `trackdiff.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub diff: DiffConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub strategy: SelectorStrategy,

    #[serde(default)]
    pub key_form: DataKeyForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_text")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_text(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_text() -> String {
    "text".to_string()
}

pub const DEFAULT_CONFIG_PATH: &str = "trackdiff.yaml";

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(_) => {
            tracing::debug!(path = config_path, "no config file, using defaults");
            return AppConfig::default();
        }
    };

    match serde_yaml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }
    }
}

// ============================================================================
// Option Builders (merge CLI args with config file)
// ============================================================================

/// CLI flags win over the config file, which wins over defaults.
pub fn resolve_options(
    strategy: Option<&str>,
    key_form: Option<&str>,
    config: &AppConfig,
) -> Result<AnalysisOptions, String> {
    let strategy = match strategy {
        Some(s) => s.parse()?,
        None => config.diff.strategy,
    };
    let key_form = match key_form {
        Some(k) => k.parse()?,
        None => config.diff.key_form,
    };

    Ok(AnalysisOptions { strategy, key_form })
}

pub fn resolve_format<'a>(format: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    format.unwrap_or(config.output.format.as_str())
}
