use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Top-level script filter document
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

/// One selectable row in the launcher's result list
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "quicklookurl")]
    pub quicklook_url: Option<String>,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Always written; an omitted `valid` reads as `true` on the launcher side
    pub valid: bool,

    pub icon: Icon,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

/// Item kind discriminator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Icon {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub icon_type: Option<String>,
}

/// Copy (Cmd-C) and large-type (Cmd-L) text
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Text {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "largetype")]
    pub large_type: Option<String>,
}

/// Actions bound to modifier keys
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<ModifierAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<ModifierAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModifierAction {
    pub arg: String,

    pub subtitle: String,

    #[serde(skip_serializing_if = "Option::is_none", rename = "quicklookurl")]
    pub quicklook_url: Option<String>,

    pub valid: bool,
}

impl ScriptFilter {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Serialize as the launcher document, indented with four spaces
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        self.serialize(&mut serializer)
            .map_err(|e| SearchError::Serialize(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| SearchError::Serialize(e.to_string()))
    }
}

impl Text {
    /// Copy and large-type both set to `value`, or `None` when it is empty
    pub fn same(value: &str) -> Option<Self> {
        non_empty(value).map(|v| Self {
            copy: Some(v.clone()),
            large_type: Some(v),
        })
    }
}

/// `Some(owned)` unless the string is empty
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
