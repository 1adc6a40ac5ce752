//! Public URL derivation for modules.
//!
//! Every page needs the same two values for a module:
//! - **Module path**: `{base_url}/{module}`, the import path tooling resolves
//! - **Documentation URL**: the module path appended to the docs host
//!
//! Concatenation is literal. No slashes are trimmed or added, so
//! `https://example.com` + `foo/bar` gives `https://example.com/foo/bar`
//! and the docs URL is `https://pkg.go.dev/https://example.com/foo/bar`.

/// Prefix every documentation link starts with.
pub const DOC_HOST: &str = "https://pkg.go.dev/";

/// URL helpers handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    base_url: String,
}

impl SiteUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full public import path of a module.
    pub fn module_path(&self, module: &str) -> String {
        format!("{}/{}", self.base_url, module)
    }

    /// Documentation page for a module.
    pub fn doc_url(&self, module: &str) -> String {
        format!("{}{}", DOC_HOST, self.module_path(module))
    }
}
