use serde::Serialize;

use crate::cli::config::{AppConfig, PairArgs, resolve_format, resolve_options};
use crate::draft::draft_model::TrackingConfigDraft;
use crate::draft::reducer::{DraftEvent, apply_all, state_key_options};
use crate::markup::error::ParseError;
use crate::report::console::format_console_report;
use crate::snapshot::extractor::snapshot;
use crate::snapshot::snapshot_model::DataKeyForm;
use crate::trace::logger::TraceLogger;
use crate::workbench::analysis::Analysis;
use crate::workbench::session::{Side, Workbench};

/// Raised when a markup file is rejected; carries the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum MarkupRejected {
    #[error("{side:?} markup: {message} ({source})")]
    Side {
        side: Side,
        message: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("markup: {message} ({source})")]
    Single {
        message: &'static str,
        #[source]
        source: ParseError,
    },
}

// ============================================================================
// diff subcommand
// ============================================================================

pub fn cmd_diff(
    pair: &PairArgs,
    format: Option<&str>,
    config: &AppConfig,
    tracer: TraceLogger,
) -> Result<String, Box<dyn std::error::Error>> {
    let analysis = load_pair(pair, config, tracer)?.analysis();

    match resolve_format(format, config) {
        "json" => Ok(serde_json::to_string_pretty(&analysis)?),
        "yaml" => Ok(serde_yaml::to_string(&analysis)?),
        _ => Ok(format_console_report(&analysis)),
    }
}

// ============================================================================
// snapshot subcommand
// ============================================================================

pub fn cmd_snapshot(
    markup_path: &str,
    key_form: Option<&str>,
    format: Option<&str>,
    config: &AppConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let key_form: DataKeyForm = match key_form {
        Some(k) => k.parse()?,
        None => config.diff.key_form,
    };
    let markup = std::fs::read_to_string(markup_path)?;
    let snapshot = snapshot(&markup, key_form).map_err(|source| MarkupRejected::Single {
        message: source.user_message(),
        source,
    })?;

    render_structured(&snapshot, format)
}

// ============================================================================
// draft subcommand
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOutput {
    pub draft: TrackingConfigDraft,
    pub selector_options: Vec<String>,
    pub state_key_options: Vec<String>,
    pub dataset_keys: Vec<String>,
}

pub fn cmd_draft(
    pair: &PairArgs,
    events_path: Option<&str>,
    format: Option<&str>,
    config: &AppConfig,
    tracer: TraceLogger,
) -> Result<String, Box<dyn std::error::Error>> {
    let analysis = load_pair(pair, config, tracer)?.analysis();

    let events: Vec<DraftEvent> = match events_path {
        Some(path) => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        None => vec![],
    };

    let output = build_draft_output(&analysis, &events);
    render_structured(&output, format)
}

pub fn build_draft_output(analysis: &Analysis, events: &[DraftEvent]) -> DraftOutput {
    let draft = apply_all(events, &TrackingConfigDraft::initial(analysis));
    DraftOutput {
        state_key_options: state_key_options(draft.state.attr, analysis),
        selector_options: analysis.selector_options(),
        dataset_keys: analysis.dataset_keys.clone(),
        draft,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read both fragments into a fresh workbench. Unlike the interactive flow
/// there is no previous snapshot to fall back on, so a rejected fragment is
/// an error.
pub fn load_pair(
    pair: &PairArgs,
    config: &AppConfig,
    tracer: TraceLogger,
) -> Result<Workbench, Box<dyn std::error::Error>> {
    let options = resolve_options(pair.strategy.as_deref(), pair.key_form.as_deref(), config)?;
    let mut workbench = Workbench::new(options).with_tracer(tracer);

    for (side, path) in [(Side::Off, &pair.off), (Side::On, &pair.on)] {
        let markup = std::fs::read_to_string(path)?;
        workbench
            .apply_markup(side, &markup)
            .map_err(|source| MarkupRejected::Side {
                side,
                message: source.user_message(),
                source,
            })?;
    }

    Ok(workbench)
}

fn render_structured<T: Serialize>(
    value: &T,
    format: Option<&str>,
) -> Result<String, Box<dyn std::error::Error>> {
    match format.unwrap_or("json") {
        "yaml" => Ok(serde_yaml::to_string(value)?),
        _ => Ok(serde_json::to_string_pretty(value)?),
    }
}
