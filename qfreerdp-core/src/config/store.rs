//! Flat key/value settings store
//!
//! Values are loosely typed the way a desktop settings backend stores them:
//! reads accept any representation that converts cleanly (`"true"` reads as
//! a boolean, `"24"` as an integer) and return `None` otherwise, leaving the
//! caller to substitute its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Resolution;

/// A single stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Integer(i64),
    /// Text
    Text(String),
    /// List of strings
    List(Vec<String>),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for SettingValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Resolution> for SettingValue {
    fn from(value: Resolution) -> Self {
        Self::Text(value.to_string())
    }
}

/// Ordered mapping from setting key to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    values: BTreeMap<String, SettingValue>,
}

impl SettingsStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `key` has a value
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Stores a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    /// Iterates keys and values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every entry of `other` into this store
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Reads a value as text. Lists do not convert.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            SettingValue::Text(s) => Some(s.clone()),
            SettingValue::Integer(n) => Some(n.to_string()),
            SettingValue::Bool(b) => Some(b.to_string()),
            SettingValue::List(_) => None,
        }
    }

    /// Reads a value as a boolean.
    ///
    /// Accepts booleans, `"true"`/`"false"`/`"1"`/`"0"` text, and integers
    /// (non-zero is true).
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            SettingValue::Bool(b) => Some(*b),
            SettingValue::Integer(n) => Some(*n != 0),
            SettingValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            SettingValue::List(_) => None,
        }
    }

    /// Reads a value as an unsigned integer
    #[must_use]
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.get(key)? {
            SettingValue::Integer(n) => u32::try_from(*n).ok(),
            SettingValue::Text(s) => s.trim().parse().ok(),
            SettingValue::Bool(_) | SettingValue::List(_) => None,
        }
    }

    /// Reads a `WIDTHxHEIGHT` value
    #[must_use]
    pub fn get_resolution(&self, key: &str) -> Option<Resolution> {
        match self.get(key)? {
            SettingValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reads a list of strings. A single text value reads as a one-item list.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            SettingValue::List(items) => Some(items.clone()),
            SettingValue::Text(s) => Some(vec![s.clone()]),
            SettingValue::Bool(_) | SettingValue::Integer(_) => None,
        }
    }

    /// Parses a store from TOML text
    ///
    /// # Errors
    ///
    /// Returns the parser message if the text is not a flat TOML table of
    /// supported values.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Serializes the store as TOML text
    ///
    /// # Errors
    ///
    /// Returns the serializer message on failure.
    pub fn to_toml_string(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|e| e.to_string())
    }
}
