//! Shared test utilities for the vanity-pages test suite.
//!
//! Provides module fixtures, scratch-file writers and tree readers used by
//! the config, generate, publish and run tests.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::types::{ModuleConfig, ModuleSet};

// =========================================================================
// Fixtures
// =========================================================================

/// Three modules: a plain one, a nested one with a custom branch, and one
/// with neither description nor explicit branch.
pub fn sample_modules() -> ModuleSet {
    let mut modules = ModuleSet::new();
    modules.insert(
        "foo".to_string(),
        ModuleConfig {
            git_url: "https://github.com/acme/foo".to_string(),
            default_branch: "main".to_string(),
            description: "Foo does things".to_string(),
        },
    );
    modules.insert(
        "tools/bar".to_string(),
        ModuleConfig {
            git_url: "https://github.com/acme/bar".to_string(),
            default_branch: "trunk".to_string(),
            description: "Bar tooling".to_string(),
        },
    );
    modules.insert(
        "baz".to_string(),
        ModuleConfig {
            git_url: "https://gitlab.com/acme/baz".to_string(),
            default_branch: "main".to_string(),
            description: String::new(),
        },
    );
    modules
}

/// JSON equivalent of [`sample_modules`], with `baz` relying on the default branch.
pub const SAMPLE_MODULES_JSON: &str = r#"{
    "foo": {"git": "https://github.com/acme/foo", "description": "Foo does things"},
    "tools/bar": {"git": "https://github.com/acme/bar", "branch": "trunk", "description": "Bar tooling"},
    "baz": {"git": "https://gitlab.com/acme/baz"}
}"#;

/// Write `content` to `<dir>/modules.json` and return its path.
pub fn write_modules_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("modules.json");
    fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// Directory trees
// =========================================================================

/// Create files (and their parent directories) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Every file under `root` as `(relative path, content)`, sorted by path.
pub fn read_tree(root: &Path) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            (
                rel.to_string_lossy().replace('\\', "/"),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

/// All `.html` files under `root`, relative and sorted.
pub fn html_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}
