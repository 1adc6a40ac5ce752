//! CLI output formatting.
//!
//! A successful run prints one line per generated page, the module name first
//! and the written file second, then a summary:
//!
//! ```text
//! Home → index.html
//! 001 baz → baz/index.html
//! 002 foo → foo/index.html
//! 003 tools/bar → tools/bar/index.html
//!
//! Generated 3 module pages in build
//! ```
//!
//! `format_*` functions are pure and return lines for testability; `print_*`
//! wrappers write them to stdout. Diagnostics go through `tracing` on stderr,
//! so stdout stays a clean page listing.

use crate::publish::Cleanup;
use crate::run::RunSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn format_run_output(summary: &RunSummary) -> Vec<String> {
    let pages = &summary.pages;
    let mut lines = vec![format!("Home → {}", pages.index.display())];

    for (i, (name, path)) in pages.modules.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), name, path.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}",
        pluralize(pages.modules.len(), "module page"),
        summary.publish.output.display()
    ));

    if let Cleanup::Failed { backup, .. } = &summary.publish.cleanup {
        lines.push(format!("Previous output left at {}", backup.display()));
    }

    lines
}

pub fn print_run_output(summary: &RunSummary) {
    for line in format_run_output(summary) {
        println!("{}", line);
    }
}
