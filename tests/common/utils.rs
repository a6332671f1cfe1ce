use std::path::PathBuf;

use trackdiff::snapshot::{
    extractor::snapshot,
    snapshot_model::{DataKeyForm, ElementSnapshot},
};

pub fn snap(markup: &str) -> ElementSnapshot {
    snapshot(markup, DataKeyForm::Dataset).unwrap()
}

pub fn snap_with(markup: &str, key_form: DataKeyForm) -> ElementSnapshot {
    snapshot(markup, key_form).unwrap()
}

/// Per-process scratch path so parallel test binaries do not collide.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trackdiff-{}-{}", std::process::id(), name))
}

pub fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub const FAV_ON: &str = r#"<button class="btn active" data-trackid="toggle_favorite">"#;
pub const FAV_OFF: &str = r#"<button class="btn" data-trackid="toggle_favorite">"#;
