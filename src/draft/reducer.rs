use serde::{Deserialize, Serialize};

use crate::workbench::analysis::Analysis;

use super::draft_model::{
    DEFAULT_NATIVE_EVENT, RegisterAfterEvent, StateAttr, StateBinding, TrackingConfigDraft,
};

/// One user edit in the configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum DraftEvent {
    SetSelector(String),
    SetShadowRootSelector(String),
    SetStateAttr(Option<StateAttr>),
    SetStateKey(String),
    SetDatasetProductKey(String),
    SetDatasetVariantKey(String),
    SetReRegisterAfterEvent(bool),
    SetOnce(bool),
    SetObserveMount(String),
    SetDelay(Option<u64>),
    ToggleRegisterAfterEvent(bool),
    SetRegisterAfterEventSelector(String),
    SetRegisterAfterEventNativeEvent(String),
}

impl TrackingConfigDraft {
    /// Fresh draft for a newly analysed pair. With a trackid present the
    /// selector is left blank and locked; otherwise it defaults to the first
    /// shared-class candidate.
    pub fn initial(analysis: &Analysis) -> Self {
        let selector = if analysis.has_trackid {
            String::new()
        } else {
            analysis.class_selectors.first().cloned().unwrap_or_default()
        };

        Self {
            native_event: DEFAULT_NATIVE_EVENT.to_string(),
            selector,
            selector_locked: analysis.has_trackid,
            shadow_root_selector: None,
            state: StateBinding::default(),
            dataset_product_key: None,
            dataset_variant_key: None,
            re_register_after_event: None,
            once: None,
            observe_mount: None,
            delay_ms: None,
            register_after_event: None,
        }
    }
}

pub fn apply(event: &DraftEvent, state: &TrackingConfigDraft) -> TrackingConfigDraft {
    let mut next = state.clone();

    match event {
        DraftEvent::SetSelector(selector) => {
            if !state.selector_locked {
                next.selector = selector.clone();
            }
        }
        DraftEvent::SetShadowRootSelector(s) => next.shadow_root_selector = non_empty(s),
        DraftEvent::SetStateAttr(attr) => {
            next.state = StateBinding {
                attr: *attr,
                key: None,
            };
        }
        DraftEvent::SetStateKey(key) => next.state.key = non_empty(key),
        DraftEvent::SetDatasetProductKey(key) => next.dataset_product_key = non_empty(key),
        DraftEvent::SetDatasetVariantKey(key) => next.dataset_variant_key = non_empty(key),
        DraftEvent::SetReRegisterAfterEvent(on) => next.re_register_after_event = on.then_some(true),
        DraftEvent::SetOnce(on) => next.once = on.then_some(true),
        DraftEvent::SetObserveMount(s) => next.observe_mount = non_empty(s),
        DraftEvent::SetDelay(ms) => next.delay_ms = ms.filter(|ms| *ms > 0),
        DraftEvent::ToggleRegisterAfterEvent(enabled) => {
            next.register_after_event = enabled.then(RegisterAfterEvent::default);
        }
        DraftEvent::SetRegisterAfterEventSelector(selector) => {
            let mut sub = state.register_after_event.clone().unwrap_or(RegisterAfterEvent {
                selector: String::new(),
                native_event: String::new(),
            });
            sub.selector = selector.clone();
            next.register_after_event = Some(sub);
        }
        DraftEvent::SetRegisterAfterEventNativeEvent(native_event) => {
            let mut sub = state.register_after_event.clone().unwrap_or(RegisterAfterEvent {
                selector: String::new(),
                native_event: String::new(),
            });
            sub.native_event = native_event.clone();
            next.register_after_event = Some(sub);
        }
    }

    next
}

/// Fold a sequence of edits over `initial`.
pub fn apply_all<'a>(
    events: impl IntoIterator<Item = &'a DraftEvent>,
    initial: &TrackingConfigDraft,
) -> TrackingConfigDraft {
    events
        .into_iter()
        .fold(initial.clone(), |state, event| apply(event, &state))
}

/// Choices offered by the state key picker for the selected family.
pub fn state_key_options(attr: Option<StateAttr>, analysis: &Analysis) -> Vec<String> {
    match attr {
        Some(StateAttr::Class) => analysis.only_in_on_class_names.clone(),
        Some(StateAttr::Data) => analysis.dataset_keys.clone(),
        Some(StateAttr::Aria) => analysis.aria_names.clone(),
        None => vec![],
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
