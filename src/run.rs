//! The full pipeline: load → stage → generate → publish.
//!
//! Ordering matters for the failure guarantees. The modules file is loaded
//! and validated before anything touches the filesystem, so a missing or
//! malformed input never creates or modifies the build directory. The build
//! directory is created (if absent) only once the input is known good, which
//! lets the first run publish into a fresh location.

use crate::config::{self, ConfigError, RunConfig};
use crate::generate::{self, GenerateError, GenerateSummary};
use crate::publish::{PublishError, PublishReport, Staging};
use crate::urls::SiteUrls;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create build directory {}: {source}", path.display())]
    CreateBuildDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render pages: {0}")]
    Generate(#[from] GenerateError),
    #[error("failed to publish: {0}")]
    Publish(#[from] PublishError),
}

/// Everything a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub pages: GenerateSummary,
    pub publish: PublishReport,
}

pub fn run(config: &RunConfig) -> Result<RunSummary, RunError> {
    config.validate()?;

    let modules = config::load_modules(&config.modules_file)?;
    info!(
        count = modules.len(),
        path = %config.modules_file.display(),
        "loaded modules"
    );

    fs::create_dir_all(&config.build_dir).map_err(|source| RunError::CreateBuildDir {
        path: config.build_dir.clone(),
        source,
    })?;

    let urls = SiteUrls::new(config.base_url.as_str());
    let staging = Staging::new(&config.build_dir)?;
    let pages = generate::generate(&urls, &modules, staging.path())?;
    info!(pages = pages.page_count(), "rendered site");

    let publish = staging.publish()?;
    info!(output = %publish.output.display(), "published");

    Ok(RunSummary { pages, publish })
}
