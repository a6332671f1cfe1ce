use serde::{Deserialize, Serialize};

use crate::{
    diff::{diff_model::SnapshotDiff, engine::diff},
    selector::{
        candidates::{
            SelectorStrategy, build_aria_selectors, build_class_selectors, build_data_selectors,
        },
        trackid::has_trackid,
    },
    snapshot::{
        identity::pair_revision,
        snapshot_model::{DataKeyForm, ElementSnapshot},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub strategy: SelectorStrategy,
    pub key_form: DataKeyForm,
}

/// Everything the configuration form is populated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Remount key: changes whenever either snapshot changes
    pub revision: String,

    pub strategy: SelectorStrategy,
    pub key_form: DataKeyForm,

    /// Classes carried by both snapshots
    pub class_names: Vec<String>,
    /// Classes only the on snapshot carries
    pub only_in_on_class_names: Vec<String>,
    /// Data keys seen on either snapshot
    pub dataset_keys: Vec<String>,
    /// Aria names (prefix stripped) seen on either snapshot
    pub aria_names: Vec<String>,

    pub class_selectors: Vec<String>,
    pub data_selectors: Vec<String>,
    pub aria_selectors: Vec<String>,

    pub has_trackid: bool,

    pub diff: SnapshotDiff,
}

impl Analysis {
    /// Selector picker contents: class candidates, then data candidates.
    pub fn selector_options(&self) -> Vec<String> {
        self.class_selectors
            .iter()
            .chain(&self.data_selectors)
            .cloned()
            .collect()
    }
}

pub fn analyze(
    on: Option<&ElementSnapshot>,
    off: Option<&ElementSnapshot>,
    options: &AnalysisOptions,
) -> Analysis {
    let diff = diff(on, off);

    let class_selectors = build_class_selectors(&diff.class.shared);
    let data_selectors = build_data_selectors(on, off, options.strategy);
    let aria_selectors = build_aria_selectors(on, off, options.strategy);
    let has_trackid = has_trackid(&diff.data.keys, options.key_form);

    tracing::debug!(
        shared_classes = diff.class.shared.len(),
        data_keys = diff.data.keys.len(),
        aria_keys = diff.aria.keys.len(),
        has_trackid,
        "analysis computed"
    );

    Analysis {
        revision: pair_revision(on, off),
        strategy: options.strategy,
        key_form: options.key_form,
        class_names: diff.class.shared.iter().cloned().collect(),
        only_in_on_class_names: diff.class.only_in_on.iter().cloned().collect(),
        dataset_keys: diff.data.keys.iter().cloned().collect(),
        aria_names: diff.aria.keys.iter().cloned().collect(),
        class_selectors,
        data_selectors,
        aria_selectors,
        has_trackid,
        diff,
    }
}
