//! Execution environments and the globals they define

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment flags as declared in a configuration
///
/// Either a map of flag name to on/off, or a plain list of enabled names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EnvironmentFlags {
    /// `{ "browser": true, "node": false }`
    Map(IndexMap<String, bool>),
    /// `["browser", "node"]`
    List(Vec<String>),
}

impl EnvironmentFlags {
    /// Iterate flags in declaration order
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, bool)> + '_> {
        match self {
            EnvironmentFlags::Map(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), *v))),
            EnvironmentFlags::List(list) => Box::new(list.iter().map(|k| (k.as_str(), true))),
        }
    }

    /// Enabled flag names in declaration order
    pub fn enabled(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for EnvironmentFlags {
    fn default() -> Self {
        EnvironmentFlags::Map(IndexMap::new())
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for EnvironmentFlags {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        EnvironmentFlags::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Whether a global may be reassigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GlobalAccess {
    Readonly,
    Writable,
}

/// A named set of predefined globals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentDefinition {
    pub name: String,
    pub description: String,
    pub globals: BTreeMap<String, GlobalAccess>,
}

impl EnvironmentDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            globals: BTreeMap::new(),
        }
    }

    pub fn readonly(mut self, globals: &[&str]) -> Self {
        for global in globals {
            self.globals
                .insert((*global).to_string(), GlobalAccess::Readonly);
        }
        self
    }

    pub fn writable(mut self, globals: &[&str]) -> Self {
        for global in globals {
            self.globals
                .insert((*global).to_string(), GlobalAccess::Writable);
        }
        self
    }

    /// Copy every global of `other` into this environment
    pub fn including(mut self, other: &EnvironmentDefinition) -> Self {
        self.globals
            .extend(other.globals.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }
}
