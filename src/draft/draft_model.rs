use serde::{Deserialize, Serialize};

/// Attribute family the tracker reads the on/off state from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateAttr {
    Class,
    Aria,
    Data,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr: Option<StateAttr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAfterEvent {
    pub selector: String,
    pub native_event: String,
}

impl Default for RegisterAfterEvent {
    fn default() -> Self {
        Self {
            selector: String::new(),
            native_event: DEFAULT_NATIVE_EVENT.to_string(),
        }
    }
}

pub const DEFAULT_NATIVE_EVENT: &str = "click";

/// Form state for one toggle-favorite tracking target. Transitions go
/// through [`super::reducer::apply`]; the value itself is never edited in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingConfigDraft {
    pub native_event: String,
    pub selector: String,

    /// Picker is locked while the element carries a trackid
    #[serde(skip)]
    pub selector_locked: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_root_selector: Option<String>,

    pub state: StateBinding,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_product_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_variant_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_register_after_event: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observe_mount: Option<String>,
    #[serde(rename = "delay", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_after_event: Option<RegisterAfterEvent>,
}
