use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeFamily {
    Class,
    Data,
    Aria,
}

/// Comparison of one attribute family between the on and off snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeDiff {
    /// Union of both sides' keys, on-snapshot keys first
    pub keys: IndexSet<String>,

    /// Non-empty on both sides
    pub shared: IndexSet<String>,

    /// Non-empty on the on side, absent or empty on the off side
    pub only_in_on: IndexSet<String>,

    /// Distinct non-empty values per key, off value first. Always empty for
    /// the class family.
    pub values_by_key: IndexMap<String, IndexSet<String>>,
}

impl AttributeDiff {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    pub class: AttributeDiff,
    pub data: AttributeDiff,
    pub aria: AttributeDiff,
}

impl SnapshotDiff {
    pub fn family(&self, family: AttributeFamily) -> &AttributeDiff {
        match family {
            AttributeFamily::Class => &self.class,
            AttributeFamily::Data => &self.data,
            AttributeFamily::Aria => &self.aria,
        }
    }
}
