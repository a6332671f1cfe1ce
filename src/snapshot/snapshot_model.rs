use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// How `data-*` attributes are keyed. Both snapshots of one comparison must
/// be extracted with the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKeyForm {
    /// DOM `dataset` key: `data-product-id` → `productId`
    #[default]
    Dataset,
    /// Raw attribute name: `data-product-id`
    Attribute,
}

impl DataKeyForm {
    pub fn key_for(self, attribute_name: &str) -> Option<String> {
        let rest = attribute_name.strip_prefix("data-")?;
        match self {
            DataKeyForm::Dataset => Some(dataset_key(rest)),
            DataKeyForm::Attribute => Some(attribute_name.to_string()),
        }
    }

    /// Canonical key of the reserved `data-trackid` attribute.
    pub fn trackid_key(self) -> &'static str {
        match self {
            DataKeyForm::Dataset => "trackid",
            DataKeyForm::Attribute => "data-trackid",
        }
    }
}

impl std::str::FromStr for DataKeyForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dataset" => Ok(DataKeyForm::Dataset),
            "attribute" => Ok(DataKeyForm::Attribute),
            other => Err(format!("unknown data key form '{other}' (expected dataset or attribute)")),
        }
    }
}

/// `product-id` → `productId`: a hyphen followed by an ASCII lowercase
/// letter is dropped and the letter upper-cased.
fn dataset_key(rest: &str) -> String {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// One pasted element, reduced to the attribute families the diff cares
/// about. Never mutated; a new paste produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSnapshot {
    pub tag: String,
    pub key_form: DataKeyForm,

    /// Class tokens in document order, first occurrence wins
    pub classes: IndexSet<String>,

    /// Canonical data key → value
    pub data: IndexMap<String, String>,

    /// `aria-` stripped name → value
    pub aria: IndexMap<String, String>,

    /// Raw `data-*` attribute names → value, used for selectors
    pub data_attributes: IndexMap<String, String>,

    /// Raw `aria-*` attribute names → value, used for selectors
    pub aria_attributes: IndexMap<String, String>,
}

impl ElementSnapshot {
    /// Raw `data-*` attribute names, in document order.
    pub fn data_selectors(&self) -> Vec<&str> {
        self.data_attributes.keys().map(String::as_str).collect()
    }

    /// Non-empty data value for a canonical key.
    pub fn data_value(&self, key: &str) -> Option<&str> {
        non_empty(self.data.get(key))
    }

    pub fn aria_value(&self, name: &str) -> Option<&str> {
        non_empty(self.aria.get(name))
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
