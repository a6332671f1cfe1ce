use indexmap::{IndexMap, IndexSet};

use crate::snapshot::snapshot_model::ElementSnapshot;

use super::diff_model::{AttributeDiff, SnapshotDiff};

/// Diff every attribute family of the on snapshot against the off snapshot.
///
/// The comparison is one-sided: keys that only the off snapshot carries
/// show up in `keys` and `values_by_key` but never in `only_in_on`. When a
/// side is missing there is nothing to compare against, so `shared` and
/// `only_in_on` stay empty.
pub fn diff(on: Option<&ElementSnapshot>, off: Option<&ElementSnapshot>) -> SnapshotDiff {
    SnapshotDiff {
        class: diff_classes(on.map(|s| &s.classes), off.map(|s| &s.classes)),
        data: diff_keyed(on.map(|s| &s.data), off.map(|s| &s.data)),
        aria: diff_keyed(on.map(|s| &s.aria), off.map(|s| &s.aria)),
    }
}

pub fn diff_classes(
    on: Option<&IndexSet<String>>,
    off: Option<&IndexSet<String>>,
) -> AttributeDiff {
    let keys = union(on.into_iter().flatten(), off.into_iter().flatten());

    let (shared, only_in_on): (IndexSet<String>, IndexSet<String>) = match (on, off) {
        (Some(on), Some(off)) => on
            .iter()
            .cloned()
            .partition(|class| off.contains(class)),
        _ => Default::default(),
    };

    AttributeDiff {
        keys,
        shared,
        only_in_on,
        values_by_key: IndexMap::new(),
    }
}

pub fn diff_keyed(
    on: Option<&IndexMap<String, String>>,
    off: Option<&IndexMap<String, String>>,
) -> AttributeDiff {
    let keys = union(
        on.into_iter().flat_map(|m| m.keys()),
        off.into_iter().flat_map(|m| m.keys()),
    );

    let value = |side: Option<&IndexMap<String, String>>, key: &str| -> Option<String> {
        side.and_then(|m| m.get(key))
            .filter(|v| !v.is_empty())
            .cloned()
    };

    let mut shared = IndexSet::new();
    let mut only_in_on = IndexSet::new();
    let mut values_by_key = IndexMap::new();

    for key in &keys {
        let on_value = value(on, key);
        let off_value = value(off, key);

        if on.is_some() && off.is_some() {
            match (&on_value, &off_value) {
                (Some(_), Some(_)) => {
                    shared.insert(key.clone());
                }
                (Some(_), None) => {
                    only_in_on.insert(key.clone());
                }
                _ => {}
            }
        }

        let values: IndexSet<String> = off_value.into_iter().chain(on_value).collect();
        values_by_key.insert(key.clone(), values);
    }

    AttributeDiff {
        keys,
        shared,
        only_in_on,
        values_by_key,
    }
}

fn union<'a>(
    first: impl Iterator<Item = &'a String>,
    second: impl Iterator<Item = &'a String>,
) -> IndexSet<String> {
    first.chain(second).cloned().collect()
}
