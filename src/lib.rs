//! # Vanity Pages
//!
//! Generates the static pages that let a custom domain act as the import path
//! for modules whose code lives somewhere else. Tooling that fetches
//! `go.acme.dev/foo` reads the `go-import` meta tag on that page and learns the
//! real repository; browsers are redirected to the module's documentation.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load       modules.json  →  ModuleSet          (decode, validate, defaults)
//! 2. Generate   ModuleSet     →  staging dir        (index + one page per module)
//! 3. Publish    staging dir   →  build/             (rename swap, old tree removed)
//! ```
//!
//! Nothing is written until the modules file has been read and validated, and
//! the build directory is only ever replaced by a complete tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`cli`] | Flag parsing, including single-dash long flags |
//! | [`config`] | Run configuration and modules file loading |
//! | [`types`] | `ModuleConfig` and `ModuleSet` |
//! | [`urls`] | Module path and documentation URL derivation |
//! | [`generate`] | Maud page rendering and writing |
//! | [`publish`] | Staging directory and atomic swap |
//! | [`run`] | The whole pipeline, wrapping each stage's errors |
//! | [`output`] | Page listing printed after a successful run |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Files
//!
//! Pages are built with [Maud](https://maud.lambda.xyz/), so there is no
//! template directory to ship and every interpolated value is escaped. The URL
//! helpers the templates need live on [`urls::SiteUrls`] and are passed in
//! explicitly.
//!
//! ## Staging Next To The Output
//!
//! The staging directory is created in the build directory's parent rather
//! than the system temp dir. A rename across filesystems fails, and `/tmp` is
//! frequently its own mount.
//!
//! ## No Locking
//!
//! Two runs against the same build directory are not coordinated. Each has
//! its own staging directory, so neither sees the other's half-written pages,
//! but the last swap wins.

pub mod cli;
pub mod config;
pub mod generate;
pub mod logging;
pub mod output;
pub mod publish;
pub mod run;
pub mod types;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
