//! Shared types used across the pipeline.
//!
//! The loader produces them, the renderer reads them. After default filling
//! they are never mutated.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Branch assumed when a module entry leaves `branch` empty or absent.
pub const DEFAULT_BRANCH: &str = "main";

/// One module entry from the modules file.
///
/// The module name is the key in [`ModuleSet`], not a field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Repository URL the `go-import` tag points at (e.g. `https://github.com/acme/foo`)
    #[serde(rename = "git", deserialize_with = "null_as_empty")]
    pub git_url: String,
    /// Branch used to build source links. Empty until defaults are applied.
    #[serde(rename = "branch", deserialize_with = "null_as_empty")]
    pub default_branch: String,
    /// Free-form description shown on the index and module pages
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A JSON `null` reads the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ModuleConfig {
    /// Fill empty fields with their defaults.
    pub fn apply_defaults(&mut self) {
        if self.default_branch.is_empty() {
            self.default_branch = DEFAULT_BRANCH.to_string();
        }
    }

    pub fn description(&self) -> Option<&str> {
        Some(self.description.trim()).filter(|d| !d.is_empty())
    }
}

/// Module name → configuration, iterated in name order.
pub type ModuleSet = BTreeMap<String, ModuleConfig>;
