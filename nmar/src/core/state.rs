//! Module state: an ordered mapping of string keys to heterogeneous values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value stored in module state.
///
/// Serializes to plain JSON without a tag, so `Pairs` becomes an array of
/// two-element arrays and `Map` becomes an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Text(String),
    Score(f64),
    List(Vec<String>),
    Pairs(Vec<(String, String)>),
    Map(BTreeMap<String, String>),
}

impl StateValue {
    pub fn text(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }

    pub fn list(items: &[&str]) -> Self {
        StateValue::List(items.iter().map(|item| item.to_string()).collect())
    }

    pub fn pairs(items: &[(&str, &str)]) -> Self {
        StateValue::Pairs(
            items
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }

    pub fn map(entries: &[(&str, &str)]) -> Self {
        StateValue::Map(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Mutable state owned by a single module instance.
///
/// Keys iterate in lexicographic order so logged and serialized output is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleState(BTreeMap<String, StateValue>);

impl ModuleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite `key`.
    pub(crate) fn set(&mut self, key: &str, value: StateValue) {
        self.0.insert(key.to_string(), value);
    }
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
