use clap::Parser;
use trackdiff::cli::commands::{build_draft_output, cmd_diff, cmd_draft, cmd_snapshot, load_pair};
use trackdiff::cli::config::{
    AppConfig, Cli, Commands, PairArgs, load_config, resolve_format, resolve_options,
};
use trackdiff::draft::reducer::DraftEvent;
use trackdiff::selector::candidates::SelectorStrategy;
use trackdiff::snapshot::snapshot_model::DataKeyForm;
use trackdiff::trace::logger::TraceLogger;

use crate::common::utils::{FAV_OFF, FAV_ON, temp_path, write_temp};

mod common;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_diff_minimal() {
    let cli = Cli::parse_from(["trackdiff", "diff", "--on", "on.html", "--off", "off.html"]);
    match cli.command {
        Commands::Diff { pair, format } => {
            assert_eq!(pair.on, "on.html");
            assert_eq!(pair.off, "off.html");
            assert!(pair.strategy.is_none());
            assert!(pair.key_form.is_none());
            assert!(format.is_none());
        }
        _ => panic!("Expected Diff command"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_diff_all_args() {
    let cli = Cli::parse_from([
        "trackdiff",
        "-vv",
        "diff",
        "--on",
        "a.html",
        "--off",
        "b.html",
        "--strategy",
        "simple",
        "--key-form",
        "attribute",
        "--format",
        "json",
        "--config",
        "custom.yaml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    match cli.command {
        Commands::Diff { pair, format } => {
            assert_eq!(pair.strategy.as_deref(), Some("simple"));
            assert_eq!(pair.key_form.as_deref(), Some("attribute"));
            assert_eq!(format.as_deref(), Some("json"));
        }
        _ => panic!("Expected Diff command"),
    }
}

#[test]
fn cli_parse_snapshot_and_draft() {
    let cli = Cli::parse_from(["trackdiff", "snapshot", "--markup", "x.html"]);
    assert!(matches!(cli.command, Commands::Snapshot { ref markup, .. } if markup == "x.html"));

    let cli = Cli::parse_from([
        "trackdiff", "draft", "--on", "a", "--off", "b", "--events", "e.yaml",
    ]);
    match cli.command {
        Commands::Draft { events, .. } => assert_eq!(events.as_deref(), Some("e.yaml")),
        _ => panic!("Expected Draft command"),
    }
}

#[test]
fn cli_requires_both_sides() {
    assert!(Cli::try_parse_from(["trackdiff", "diff", "--on", "a.html"]).is_err());
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
fn missing_config_file_uses_defaults() {
    let config = load_config(Some("/nonexistent/trackdiff.yaml"));
    assert_eq!(config.diff.strategy, SelectorStrategy::Paired);
    assert_eq!(config.diff.key_form, DataKeyForm::Dataset);
    assert_eq!(config.output.format, "text");
    assert!(config.trace.path.is_none());
}

#[test]
fn malformed_config_file_uses_defaults() {
    let path = write_temp("malformed.yaml", "diff: [unclosed");
    let config = load_config(path.to_str());
    assert_eq!(config.diff.strategy, SelectorStrategy::Paired);
    let _ = std::fs::remove_file(path);
}

#[test]
fn partial_config_file_is_merged_with_defaults() {
    let path = write_temp(
        "partial.yaml",
        "diff:\n  strategy: simple\n  key_form: attribute\ntrace:\n  path: t.jsonl\n",
    );
    let config = load_config(path.to_str());
    assert_eq!(config.diff.strategy, SelectorStrategy::Simple);
    assert_eq!(config.diff.key_form, DataKeyForm::Attribute);
    assert_eq!(config.output.format, "text");
    assert_eq!(config.trace.path.as_deref(), Some("t.jsonl"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn cli_flags_override_config() {
    let mut config = AppConfig::default();
    config.diff.strategy = SelectorStrategy::Simple;

    let from_config = resolve_options(None, None, &config).unwrap();
    assert_eq!(from_config.strategy, SelectorStrategy::Simple);

    let from_cli = resolve_options(Some("paired"), Some("attribute"), &config).unwrap();
    assert_eq!(from_cli.strategy, SelectorStrategy::Paired);
    assert_eq!(from_cli.key_form, DataKeyForm::Attribute);

    assert!(resolve_options(Some("fuzzy"), None, &config).is_err());
    assert_eq!(resolve_format(None, &config), "text");
    assert_eq!(resolve_format(Some("yaml"), &config), "yaml");
}

// ============================================================================
// Command Tests
// ============================================================================

fn pair_files(tag: &str, on: &str, off: &str) -> PairArgs {
    PairArgs {
        on: write_temp(&format!("{tag}-on.html"), on).display().to_string(),
        off: write_temp(&format!("{tag}-off.html"), off).display().to_string(),
        strategy: None,
        key_form: None,
    }
}

#[test]
fn diff_command_emits_json() {
    let pair = pair_files("diff-json", FAV_ON, FAV_OFF);
    let out = cmd_diff(&pair, Some("json"), &AppConfig::default(), TraceLogger::disabled()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["has_trackid"], true);
    assert_eq!(json["class_names"][0], "btn");
    assert_eq!(json["diff"]["class"]["only_in_on"][0], "active");
}

#[test]
fn diff_command_defaults_to_text() {
    let pair = pair_files("diff-text", FAV_ON, FAV_OFF);
    let out = cmd_diff(&pair, None, &AppConfig::default(), TraceLogger::disabled()).unwrap();
    assert!(out.contains("[class] shared: btn | only in on: active"));
}

#[test]
fn invalid_markup_fails_the_command() {
    let pair = pair_files("diff-invalid", "<<<", FAV_OFF);
    let err = cmd_diff(&pair, None, &AppConfig::default(), TraceLogger::disabled()).unwrap_err();
    assert!(err.to_string().contains("invalid HTML"), "got: {err}");
}

#[test]
fn missing_markup_file_is_an_error() {
    let pair = PairArgs {
        on: temp_path("does-not-exist-on.html").display().to_string(),
        off: temp_path("does-not-exist-off.html").display().to_string(),
        strategy: None,
        key_form: None,
    };
    assert!(load_pair(&pair, &AppConfig::default(), TraceLogger::disabled()).is_err());
}

#[test]
fn snapshot_command_prints_yaml() {
    let path = write_temp("snapshot.html", r#"<span aria-pressed="true" class="x">"#);
    let out = cmd_snapshot(path.to_str().unwrap(), None, Some("yaml"), &AppConfig::default()).unwrap();

    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["tag"].as_str(), Some("span"));
    assert_eq!(value["aria"]["pressed"].as_str(), Some("true"));
}

#[test]
fn draft_command_replays_events() {
    let pair = pair_files(
        "draft",
        r#"<button class="btn on" aria-pressed="true">"#,
        r#"<button class="btn" aria-pressed="false">"#,
    );
    let events = write_temp(
        "draft-events.yaml",
        "- event: set_state_attr\n  value: class\n- event: set_state_key\n  value: \"on\"\n",
    );

    let out = cmd_draft(
        &pair,
        events.to_str(),
        None,
        &AppConfig::default(),
        TraceLogger::disabled(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["draft"]["selector"], ".btn");
    assert_eq!(json["draft"]["state"]["attr"], "class");
    assert_eq!(json["draft"]["state"]["key"], "on");
    assert_eq!(json["stateKeyOptions"][0], "on");
}

#[test]
fn draft_output_without_events_is_initial_draft() {
    let pair = pair_files("draft-initial", FAV_ON, FAV_OFF);
    let analysis = load_pair(&pair, &AppConfig::default(), TraceLogger::disabled())
        .unwrap()
        .analysis();
    let events: Vec<DraftEvent> = vec![];

    let output = build_draft_output(&analysis, &events);
    assert_eq!(output.draft.selector, "");
    assert!(output.state_key_options.is_empty());
    assert_eq!(output.dataset_keys, vec!["trackid"]);
}
