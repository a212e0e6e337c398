use std::path::PathBuf;

use ultratype_dsl::ParseOptions;

use crate::cli::{CheckArgs, GlobalOpts};
use crate::commands::{discover_schema_files, read_source};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `check` command: parse every file and report all errors.
///
/// Unlike `gen` and `tidy`, a bad file does not stop the run; every file is
/// parsed and its errors rendered before the command fails.
pub fn run(args: CheckArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let options = ParseOptions {
        strict: args.strict || config.generate.strict,
    };
    let files = discover_schema_files(&args.paths, config.extension())?;

    let mut total_fields = 0usize;
    let mut total_errors = 0usize;
    let mut failed: Vec<PathBuf> = Vec::new();
    let mut all_file_results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let source_text = read_source(file)?;
        let filename = file.display().to_string();

        match ultratype_dsl::parse_file_with(&source_text, options) {
            Ok(model) => {
                let count = model.fields.len();
                total_fields += count;

                match output.mode {
                    OutputMode::Json => {
                        let mut result = serde_json::json!({
                            "file": filename,
                            "class": model.name.as_str(),
                            "fields": count,
                            "errors": [],
                        });
                        if args.print_model {
                            result["model"] = serde_json::to_value(&model)
                                .map_err(|e| CliError::Other(e.to_string()))?;
                        }
                        all_file_results.push(result);
                    }
                    _ => {
                        if args.print_model {
                            print!("{}", ultratype_dsl::print(&model));
                        }
                        output.status(&format!(
                            "  {filename} .... {} ({count} fields)",
                            model.name
                        ));
                    }
                }
            }
            Err(errors) => {
                total_errors += errors.len();

                output.report_parse_errors(&errors, &source_text, &filename);
                if output.mode == OutputMode::Json {
                    let error_list: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|e| {
                            serde_json::json!({
                                "message": e.to_string(),
                                "start": e.span().start,
                                "end": e.span().end,
                            })
                        })
                        .collect();
                    all_file_results.push(serde_json::json!({
                        "file": filename,
                        "errors": error_list,
                    }));
                }
                failed.push(file.clone());
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            let summary = format!(
                "{} files checked, {total_fields} fields, {total_errors} errors",
                files.len()
            );
            if failed.is_empty() {
                output.success(&summary);
            } else {
                output.warn(&summary);
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "fields": total_fields,
                "errors": total_errors,
                "results": all_file_results,
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{total_fields}\t{total_errors}", files.len());
        }
    }

    match failed.len() {
        0 => Ok(()),
        // Individual errors were rendered above.
        1 => Err(CliError::Parse {
            errors: vec![],
            source_text: String::new(),
            file: failed.remove(0),
        }),
        n => Err(CliError::Parse {
            errors: vec![],
            source_text: String::new(),
            file: PathBuf::from(format!("{n} files")),
        }),
    }
}
