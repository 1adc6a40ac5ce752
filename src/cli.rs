//! Command-line interface.
//!
//! Flags keep the single-dash spelling the tool has always documented
//! (`-base-url`, `-build-dir`); [`normalize_args`] rewrites them to the
//! double-dash form clap parses. Both spellings work, with a space or `=`
//! before the value.

use crate::config::RunConfig;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be written with a single dash.
const LONG_FLAGS: &[&str] = &[
    "base-url",
    "modules",
    "build-dir",
    "verbose",
    "help",
    "version",
];

#[derive(Parser, Debug)]
#[command(name = "vanity-pages")]
#[command(version)]
#[command(about = "Generate vanity import path pages for modules hosted elsewhere")]
#[command(long_about = "\
Generate vanity import path pages for modules hosted elsewhere

Reads a JSON file mapping module names to repositories and writes one page
per module plus an index. Each module page carries the go-import and
go-source meta tags and redirects browsers to the module's documentation.

Modules file:

  {
    \"foo\":       {\"git\": \"https://github.com/acme/foo\", \"description\": \"Foo\"},
    \"tools/bar\": {\"git\": \"https://github.com/acme/bar\", \"branch\": \"trunk\"}
  }

  branch defaults to \"main\".

Output (with -base-url https://go.acme.dev):

  build/
  ├── index.html             # lists every module
  ├── foo/index.html         # go.acme.dev/foo
  └── tools/bar/index.html   # go.acme.dev/tools/bar

The build directory is replaced atomically: pages are rendered into a
staging directory first and swapped in only once complete.")]
pub struct Cli {
    /// Base URL for your custom domain (required)
    #[arg(long, env = "VANITY_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to modules JSON file
    #[arg(long, env = "VANITY_MODULES", default_value = "modules.json")]
    pub modules: PathBuf,

    /// Output directory for generated files
    #[arg(long, env = "VANITY_BUILD_DIR", default_value = "build")]
    pub build_dir: PathBuf,

    /// Log each step to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse from an argument list that may use single-dash long flags.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            base_url: self.base_url.clone().unwrap_or_default(),
            modules_file: self.modules.clone(),
            build_dir: self.build_dir.clone(),
        }
    }
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known
/// long flags. The program name and anything after `--` pass through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let rewritten = single_dash_long(&arg).map(|rest| OsString::from(format!("--{rest}")));
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

/// `-base-url=x` → `Some("base-url=x")`; anything else → `None`.
fn single_dash_long(arg: &OsString) -> Option<&str> {
    let rest = arg.to_str()?.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn single_dash_flags_are_rewritten() {
        let args = normalize_args(["bin", "-base-url", "https://x.dev", "-build-dir=out"]);
        assert_eq!(
            strings(args),
            ["bin", "--base-url", "https://x.dev", "--build-dir=out"]
        );
    }

    #[test]
    fn double_dash_and_short_flags_untouched() {
        let args = normalize_args(["bin", "--modules", "m.json", "-h", "-x"]);
        assert_eq!(strings(args), ["bin", "--modules", "m.json", "-h", "-x"]);
    }

    #[test]
    fn values_after_terminator_untouched() {
        let args = normalize_args(["bin", "--", "-modules"]);
        assert_eq!(strings(args), ["bin", "--", "-modules"]);
    }

    #[test]
    fn program_name_untouched() {
        let args = normalize_args(["-help"]);
        assert_eq!(strings(args), ["-help"]);
    }

    // Every flag is given explicitly, and explicit flags take precedence over
    // `VANITY_*` variables, so the calling shell's environment does not leak in.
    #[test]
    fn parses_go_style_flags() {
        let cli = Cli::try_parse_args([
            "vanity-pages",
            "-base-url",
            "https://go.acme.dev",
            "-modules=mods.json",
            "-build-dir",
            "public",
        ])
        .unwrap();
        let config = cli.run_config();
        assert_eq!(config.base_url, "https://go.acme.dev");
        assert_eq!(config.modules_file, PathBuf::from("mods.json"));
        assert_eq!(config.build_dir, PathBuf::from("public"));
    }

    /// Declared default of a flag, read from the command definition so
    /// `VANITY_*` variables in the calling shell cannot interfere.
    fn declared_default(id: &str) -> Vec<String> {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == id)
            .unwrap_or_else(|| panic!("no argument {id}"));
        arg.get_default_values()
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn defaults_apply() {
        assert_eq!(declared_default("modules"), ["modules.json"]);
        assert_eq!(declared_default("build_dir"), ["build"]);
        assert!(declared_default("base_url").is_empty());

        let cli = Cli::try_parse_args(["vanity-pages", "--base-url", "https://x.dev"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_bind_environment_variables() {
        let command = Cli::command();
        for (id, var) in [
            ("base_url", "VANITY_BASE_URL"),
            ("modules", "VANITY_MODULES"),
            ("build_dir", "VANITY_BUILD_DIR"),
        ] {
            let arg = command.get_arguments().find(|a| a.get_id() == id).unwrap();
            assert_eq!(arg.get_env(), Some(std::ffi::OsStr::new(var)));
        }
    }

    #[test]
    fn single_dash_help_displays_help() {
        let err = Cli::try_parse_args(["vanity-pages", "-help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn unknown_flag_is_error() {
        let err = Cli::try_parse_args(["vanity-pages", "-nope"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
