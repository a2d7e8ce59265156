use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::AsRefStr;

pub type Item = HashMap<String, AttributeValue>;

/// A single typed attribute, serialized in the `{"S": "..."}` shape used by
/// document stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsRefStr)]
pub enum AttributeValue {
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    String(String),

    /// Numbers are kept in their textual form so no precision is lost
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    Number(String),
}

impl AttributeValue {
    pub fn s(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}
