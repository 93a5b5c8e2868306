//! Pathway lookup table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pathway identifier to pathway name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathwayTable {
    names: HashMap<String, String>,
}

impl PathwayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.names.get(identifier).map(String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.names.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.names
    }

    pub(crate) fn names_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.names
    }
}
