//! Run configuration and modules file loading.
//!
//! ## Modules File
//!
//! A single JSON object keyed by module name:
//!
//! ```json
//! {
//!   "foo": {
//!     "git": "https://github.com/acme/foo",
//!     "description": "Foo does things"
//!   },
//!   "tools/bar": {
//!     "git": "https://github.com/acme/bar",
//!     "branch": "trunk"
//!   }
//! }
//! ```
//!
//! Every field is optional, and `null` counts as missing. An empty or missing
//! `branch` becomes `"main"`. Unknown fields are ignored.
//!
//! Field names are matched exactly: `"Git"` or `"Branch"` are unknown fields
//! and ignored, not aliases of `git` and `branch`. A module whose only URL is
//! under such a key loads with an empty `git` and a warning.
//!
//! Module names become directories under the output root, so they must be
//! relative paths made only of normal segments (`foo`, `tools/bar`). Names
//! such as `../escape` or `/abs` are rejected, as is any `index.html`
//! segment, which would collide with a generated page.

use crate::generate::PAGE_FILE;
use crate::types::ModuleSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Validation(String),
}

/// Validated inputs for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Public prefix of every module path, e.g. `https://go.acme.dev`
    pub base_url: String,
    /// Path to the modules JSON file
    pub modules_file: PathBuf,
    /// Directory that receives the generated site
    pub build_dir: PathBuf,
}

impl RunConfig {
    /// Reject empty required values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("--base-url is required".into()));
        }
        if self.modules_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("--modules is required".into()));
        }
        if self.build_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("--build-dir is required".into()));
        }
        Ok(())
    }
}

/// Load the modules file, validate names and fill defaults.
pub fn load_modules(path: &Path) -> Result<ModuleSet, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut modules = parse_modules(&content).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    for (name, module) in modules.iter_mut() {
        validate_module_name(name)?;
        module.apply_defaults();
        if module.git_url.is_empty() {
            warn!(module = %name, "module has no git URL; its go-import tag will be incomplete");
        }
    }

    debug!(count = modules.len(), path = %path.display(), "loaded modules");
    Ok(modules)
}

/// Decode the modules JSON without applying defaults.
pub fn parse_modules(content: &str) -> Result<ModuleSet, serde_json::Error> {
    serde_json::from_str(content)
}

/// A module name must map to a directory strictly inside the output root.
pub fn validate_module_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |why: &str| ConfigError::Validation(format!("invalid module name {name:?}: {why}"));

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.starts_with('/') {
        return Err(invalid("must be a relative path"));
    }
    for segment in name.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." => return Err(invalid("must not contain '.' segments")),
            ".." => return Err(invalid("must not contain '..'")),
            PAGE_FILE => return Err(invalid("'index.html' is reserved for generated pages")),
            _ => {}
        }
    }
    // Catches platform prefixes such as `C:` that slash splitting cannot see.
    if !Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(invalid("must be a relative path"));
    }
    Ok(())
}
