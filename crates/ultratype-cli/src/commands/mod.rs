pub mod check;
pub mod completions;
pub mod generate;
pub mod languages;
pub mod tidy;

use std::path::{Path, PathBuf};

use ultratype_core::types::SchemaModel;
use ultratype_dsl::ParseOptions;

use crate::error::CliError;

/// Discover schema files from a list of paths.
///
/// Paths can be files (used directly, whatever their extension) or
/// directories (searched recursively for `**/*.<extension>`).
pub fn discover_schema_files(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/**/*.{extension}", path.display());
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            let before = files.len();
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
            if files.len() == before {
                return Err(CliError::NoSchemaFiles { path: path.clone() });
            }
        } else {
            return Err(CliError::Io {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered schema files");
    Ok(files)
}

/// Read a schema file into memory.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read and parse one schema file, keeping the source for diagnostics.
pub fn parse_schema_file(
    path: &Path,
    options: ParseOptions,
) -> Result<(String, SchemaModel), CliError> {
    let source_text = read_source(path)?;
    match ultratype_dsl::parse_file_with(&source_text, options) {
        Ok(model) => Ok((source_text, model)),
        Err(errors) => Err(CliError::Parse {
            errors,
            source_text,
            file: path.to_path_buf(),
        }),
    }
}
