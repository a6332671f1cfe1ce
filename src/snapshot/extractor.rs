use indexmap::{IndexMap, IndexSet};

use crate::markup::{error::ParseError, node::ElementNode, parser::parse};

use super::snapshot_model::{DataKeyForm, ElementSnapshot};

pub fn extract(node: &ElementNode, key_form: DataKeyForm) -> ElementSnapshot {
    let classes: IndexSet<String> = node
        .attr("class")
        .map(|raw| raw.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let mut data = IndexMap::new();
    let mut data_attributes = IndexMap::new();
    for (name, value) in node.attrs_with_prefix("data-") {
        if let Some(key) = key_form.key_for(name) {
            data.insert(key, value.to_string());
        }
        data_attributes.insert(name.to_string(), value.to_string());
    }

    let mut aria = IndexMap::new();
    let mut aria_attributes = IndexMap::new();
    for (name, value) in node.attrs_with_prefix("aria-") {
        if let Some(stripped) = name.strip_prefix("aria-") {
            aria.insert(stripped.to_string(), value.to_string());
        }
        aria_attributes.insert(name.to_string(), value.to_string());
    }

    ElementSnapshot {
        tag: node.tag.clone(),
        key_form,
        classes,
        data,
        aria,
        data_attributes,
        aria_attributes,
    }
}

/// Parse and extract in one step.
pub fn snapshot(markup: &str, key_form: DataKeyForm) -> Result<ElementSnapshot, ParseError> {
    let node = parse(markup)?;
    Ok(extract(&node, key_form))
}
