use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Schema compiler for a line-oriented type DSL.
///
/// ultratype reads `.ut` schema files and either generates source code for a
/// target language or rewrites them in canonical, column-aligned form.
#[derive(Parser)]
#[command(
    name = "ultratype",
    version,
    about = "Schema compiler for a line-oriented type DSL",
    after_help = "Use 'ultratype <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: ULTRATYPE_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "ULTRATYPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate source code from schema files
    Gen(GenArgs),

    /// Rewrite schema files in canonical form
    Tidy(TidyArgs),

    /// Parse and validate schema files
    Check(CheckArgs),

    /// List supported target languages
    Languages,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),

    /// Unrecognized commands are accepted and ignored.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Arguments for `ultratype gen`.
#[derive(Args)]
pub struct GenArgs {
    /// Target language identifier (see `ultratype languages`)
    pub language: String,

    /// Schema files or directories
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Write one file per schema into this directory instead of stdout
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Reject unrecognized text after a field's tags
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for `ultratype tidy`.
#[derive(Args)]
pub struct TidyArgs {
    /// Schema files or directories
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report files that are not canonical without rewriting them
    #[arg(long = "check")]
    pub check: bool,
}

/// Arguments for `ultratype check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Schema files or directories
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Reject unrecognized text after a field's tags
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print each parsed model
    #[arg(long = "print")]
    pub print_model: bool,
}

/// Arguments for `ultratype completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}
