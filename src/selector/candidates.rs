use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::snapshot::snapshot_model::ElementSnapshot;

/// How attribute selector candidates are derived from the two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStrategy {
    /// One `[name="value"]` per non-empty attribute on either snapshot
    Simple,
    /// One `[name="off"],[name="on"]` per attribute name carried by both
    #[default]
    Paired,
}

impl std::str::FromStr for SelectorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(SelectorStrategy::Simple),
            "paired" => Ok(SelectorStrategy::Paired),
            other => Err(format!("unknown selector strategy '{other}' (expected simple or paired)")),
        }
    }
}

pub fn build_class_selectors<'a>(classes: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    dedup(classes.into_iter().map(|class| format!(".{class}")))
}

pub fn build_data_selectors(
    on: Option<&ElementSnapshot>,
    off: Option<&ElementSnapshot>,
    strategy: SelectorStrategy,
) -> Vec<String> {
    build_attribute_selectors(
        on.map(|s| &s.data_attributes),
        off.map(|s| &s.data_attributes),
        strategy,
    )
}

pub fn build_aria_selectors(
    on: Option<&ElementSnapshot>,
    off: Option<&ElementSnapshot>,
    strategy: SelectorStrategy,
) -> Vec<String> {
    build_attribute_selectors(
        on.map(|s| &s.aria_attributes),
        off.map(|s| &s.aria_attributes),
        strategy,
    )
}

/// Works on raw attribute names, so the output is valid for either key form.
///
/// Values are substituted as-is. A value containing `"` produces a broken
/// selector.
pub fn build_attribute_selectors(
    on: Option<&IndexMap<String, String>>,
    off: Option<&IndexMap<String, String>>,
    strategy: SelectorStrategy,
) -> Vec<String> {
    match strategy {
        SelectorStrategy::Simple => dedup(
            on.into_iter()
                .chain(off)
                .flat_map(|attrs| attrs.iter())
                .filter(|(_, value)| !value.is_empty())
                .map(|(name, value)| attribute_selector(name, value)),
        ),
        SelectorStrategy::Paired => {
            let (Some(on), Some(off)) = (on, off) else {
                return vec![];
            };
            dedup(on.iter().filter_map(|(name, on_value)| {
                let off_value = off.get(name)?;
                let pair: IndexSet<String> = [
                    attribute_selector(name, off_value),
                    attribute_selector(name, on_value),
                ]
                .into_iter()
                .collect();
                Some(pair.into_iter().collect::<Vec<_>>().join(","))
            }))
        }
    }
}

pub fn attribute_selector(name: &str, value: &str) -> String {
    format!("[{name}=\"{value}\"]")
}

fn dedup(selectors: impl Iterator<Item = String>) -> Vec<String> {
    selectors.collect::<IndexSet<_>>().into_iter().collect()
}
