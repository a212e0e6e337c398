use std::path::PathBuf;

use ultratype_codegen::CodegenError;
use ultratype_dsl::DslError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error, including a model the generator cannot render
/// - 2: invalid arguments / usage error
/// - 3: parse error (schema validation failure)
/// - 4: no generator for the requested language
/// - 5: `tidy --check` found files that are not canonical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
    UnsupportedLanguage = 4,
    TidyCheckFailed = 5,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Parse errors from ultratype-dsl.
    #[error("parse errors in {file}")]
    Parse {
        errors: Vec<DslError>,
        source_text: String,
        file: PathBuf,
    },

    /// The requested language has no registered generator.
    #[error(transparent)]
    UnsupportedLanguage(#[from] CodegenError),

    /// The generator rejected a parsed model.
    #[error("cannot generate {}: {source}", file.display())]
    Generate {
        file: PathBuf,
        source: CodegenError,
    },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A directory argument contained no schema files.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// `tidy --check` found files whose contents differ from their tidy form.
    #[error("{} file(s) not tidy", files.len())]
    TidyCheckFailed { files: Vec<PathBuf> },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::UnsupportedLanguage(_) => ExitCode::UnsupportedLanguage,
            Self::Config { .. } | Self::NoSchemaFiles { .. } => ExitCode::InvalidArguments,
            Self::TidyCheckFailed { .. } => ExitCode::TidyCheckFailed,
            Self::Generate { .. } | Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { errors, file, .. } => {
                let error_list: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        let span = e.span();
                        serde_json::json!({
                            "message": e.to_string(),
                            "start": span.start,
                            "end": span.end,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "error": "parse_error",
                    "file": file.display().to_string(),
                    "errors": error_list,
                })
            }
            Self::UnsupportedLanguage(e) => {
                let identifier = match e {
                    CodegenError::UnsupportedLanguage { identifier } => identifier.clone(),
                    other => other.to_string(),
                };
                serde_json::json!({
                    "error": "unsupported_language",
                    "language": identifier,
                    "supported": ultratype_codegen::registry::identifiers(),
                })
            }
            Self::Generate { file, source } => serde_json::json!({
                "error": "generate_error",
                "file": file.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            Self::TidyCheckFailed { files } => serde_json::json!({
                "error": "tidy_check_failed",
                "files": files
                    .iter()
                    .map(|f| f.display().to_string())
                    .collect::<Vec<_>>(),
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
