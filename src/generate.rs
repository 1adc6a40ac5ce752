//! HTML page generation.
//!
//! Renders the site into a directory. Callers hand in a staging directory;
//! [`publish`](crate::publish) moves it into place afterwards.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): every module with its import path, docs
//!   link, repository link and description
//! - **Module pages** (`/{module}/index.html`): the `go-import` and
//!   `go-source` meta tags tooling reads, plus a redirect to the docs page
//!   for browsers
//!
//! ## Output Structure
//!
//! ```text
//! build/
//! ├── index.html
//! ├── foo/
//! │   └── index.html
//! └── tools/
//!     └── bar/
//!         └── index.html      # nested module names nest directories
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every interpolated value is escaped, so descriptions and URLs from the
//! modules file cannot inject markup.

use crate::types::{ModuleConfig, ModuleSet};
use crate::urls::SiteUrls;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pages written by [`generate`], as paths relative to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub index: PathBuf,
    pub modules: Vec<(String, PathBuf)>,
}

impl GenerateSummary {
    pub fn page_count(&self) -> usize {
        self.modules.len() + 1
    }
}

/// File name of every generated page.
pub const PAGE_FILE: &str = "index.html";

const CSS: &str = include_str!("../static/style.css");

/// Render the index page and one page per module into `output_dir`.
pub fn generate(
    urls: &SiteUrls,
    modules: &ModuleSet,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let index = write_page(output_dir, Path::new(""), render_index(urls, modules))?;

    let mut summary = GenerateSummary {
        index,
        modules: Vec::with_capacity(modules.len()),
    };

    for (name, config) in modules {
        let page = write_page(output_dir, Path::new(name), render_module(urls, name, config))?;
        summary.modules.push((name.clone(), page));
    }

    Ok(summary)
}

/// Write `markup` to `<root>/<dir>/index.html` and return the relative path.
fn write_page(root: &Path, dir: &Path, markup: Markup) -> Result<PathBuf, GenerateError> {
    let page_dir = root.join(dir);
    fs::create_dir_all(&page_dir).map_err(|source| GenerateError::CreateDir {
        path: page_dir.clone(),
        source,
    })?;

    let path = page_dir.join(PAGE_FILE);
    fs::write(&path, markup.into_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(page = %path.display(), "wrote page");

    Ok(dir.join(PAGE_FILE))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head_extra)
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// `go-source` content: import path, home, directory and file URL templates.
///
/// `{/dir}`, `{file}` and `{line}` are placeholders the resolver fills in.
fn go_source_content(module_path: &str, config: &ModuleConfig) -> String {
    let repo = &config.git_url;
    let branch = &config.default_branch;
    format!(
        "{module_path} {repo} {repo}/tree/{branch}{{/dir}} {repo}/blob/{branch}{{/dir}}/{{file}}#L{{line}}"
    )
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page listing every module
pub fn render_index(urls: &SiteUrls, modules: &ModuleSet) -> Markup {
    let content = html! {
        main.index-page {
            h1 { (urls.base_url()) }
            @if modules.is_empty() {
                p { "No modules are published here yet." }
            } @else {
                ul.module-list {
                    @for (name, config) in modules {
                        @let module_path = urls.module_path(name);
                        li {
                            a.module-path href=(urls.doc_url(name)) { (module_path) }
                            @if let Some(desc) = config.description() {
                                p.module-description { (desc) }
                            }
                            p.module-links {
                                a href=(urls.doc_url(name)) { "Documentation" }
                                @if !config.git_url.is_empty() {
                                    " · "
                                    a href=(config.git_url) { "Source" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(urls.base_url(), html! {}, content)
}

/// Renders the landing page for a single module
pub fn render_module(urls: &SiteUrls, name: &str, config: &ModuleConfig) -> Markup {
    let module_path = urls.module_path(name);
    let doc_url = urls.doc_url(name);

    let head = html! {
        meta name="go-import" content={ (module_path) " git " (config.git_url) };
        meta name="go-source" content=(go_source_content(&module_path, config));
        meta http-equiv="refresh" content={ "0; url=" (doc_url) };
    };

    let content = html! {
        main.module-page {
            h1 { (module_path) }
            @if let Some(desc) = config.description() {
                p.module-description { (desc) }
            }
            pre.install { "go get " (module_path) }
            p.module-links {
                "Redirecting to "
                a href=(doc_url) { (doc_url) }
            }
            @if !config.git_url.is_empty() {
                p.module-links {
                    "Source: "
                    a href=(config.git_url) { (config.git_url) }
                    " (" (config.default_branch) ")"
                }
            }
        }
    };

    base_document(&module_path, head, content)
}

// ============================================================================
// Tests
// ============================================================================
