//! Terminal output for `ultratype` commands.
//!
//! Generated sources and listings go to stdout. Progress, diagnostics and
//! errors go to stderr, so `ultratype gen go user.ut > user.go` stays clean.

use console::{Style, Term};
use ultratype_dsl::DslError;

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostics;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    /// Maps a `--format` value. clap has already rejected anything else.
    fn from_format(format: &str) -> Self {
        match format {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Human,
        }
    }
}

/// Severity prefix of a one-line human-mode message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Ok,
    Warning,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning:",
            Self::Error => "error:",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Ok => Style::new().green().bold(),
            Self::Warning => Style::new().yellow().bold(),
            Self::Error => Style::new().red().bold(),
        }
    }
}

/// Output context derived from global flags.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from global CLI options.
    ///
    /// Color needs a terminal on stderr that is not `TERM=dumb`, and no
    /// `--no-color` / `NO_COLOR`.
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: OutputMode::from_format(&global.format),
            quiet: global.quiet,
            use_color,
        }
    }

    fn labelled(&self, level: Level, msg: &str) -> String {
        if self.use_color {
            format!("{} {msg}", level.style().apply_to(level.label()))
        } else {
            format!("{} {msg}", level.label())
        }
    }

    /// Summary line after a successful run (human mode, not quiet).
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{}", self.labelled(Level::Ok, msg));
    }

    /// Print a warning to stderr (not in quiet mode).
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => eprintln!("{}", self.labelled(Level::Warning, msg)),
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    /// Reports every error of one schema file on stderr.
    ///
    /// Human mode renders miette reports with source snippets; plain mode
    /// writes one line per error. JSON mode writes nothing, since callers
    /// fold the errors into their own document.
    pub fn report_parse_errors(&self, errors: &[DslError], source_text: &str, filename: &str) {
        match self.mode {
            OutputMode::Human => {
                for report in render_diagnostics(errors, source_text, filename) {
                    eprintln!("{report:?}");
                }
            }
            OutputMode::Plain => {
                for line in plain_error_lines(errors, filename) {
                    eprintln!("{line}");
                }
            }
            OutputMode::Json => {}
        }
    }

    /// Print the error that ends the run.
    ///
    /// A parse error that still carries its `DslError`s reports them first.
    pub fn print_error(&self, err: &CliError) {
        if let CliError::Parse {
            errors,
            source_text,
            file,
        } = err
        {
            self.report_parse_errors(errors, source_text, &file.display().to_string());
        }

        match self.mode {
            OutputMode::Human => eprintln!("{}", self.labelled(Level::Error, &err.to_string())),
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    /// Print JSON data to stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }

    /// Per-file progress line on stderr (human mode, not quiet).
    pub fn status(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{msg}");
    }

    /// Generated source on stdout, verbatim. Quiet mode does not suppress it.
    pub fn emit(&self, text: &str) {
        print!("{text}");
    }
}

/// `file<TAB>error<TAB>message`, one per error.
fn plain_error_lines(errors: &[DslError], filename: &str) -> Vec<String> {
    errors
        .iter()
        .map(|e| format!("{filename}\terror\t{e}"))
        .collect()
}
