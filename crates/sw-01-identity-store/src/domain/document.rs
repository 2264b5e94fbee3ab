//! # Whitelist Document
//!
//! The persisted form of the mapping: one flat JSON object, keys are player
//! names, values are identity strings (`""` for a pending placeholder).
//!
//! Typed as `BTreeMap<String, String>`, so a document with nested objects,
//! numbers or `null` values fails to parse instead of being coerced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat name → identity-string document, keys kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhitelistDocument(BTreeMap<String, String>);

impl WhitelistDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, identity: impl Into<String>) {
        self.0.insert(name.into(), identity.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode for disk. Pretty-printed so operators can read and hand-edit it.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(&self.0)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WhitelistDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
