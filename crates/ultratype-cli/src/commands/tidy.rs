use crate::cli::{GlobalOpts, TidyArgs};
use crate::commands::{discover_schema_files, read_source};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `tidy` command: rewrite schema files in canonical form.
///
/// With `--check` nothing is written; files that would change are listed
/// and the command fails.
pub fn run(args: TidyArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let files = discover_schema_files(&args.paths, config.extension())?;

    let mut changed = Vec::new();
    for file in &files {
        let source_text = read_source(file)?;
        let tidied = match ultratype_dsl::tidy(&source_text) {
            Ok(tidied) => tidied,
            Err(errors) => {
                return Err(CliError::Parse {
                    errors,
                    source_text,
                    file: file.clone(),
                })
            }
        };

        if tidied == source_text {
            tracing::debug!(file = %file.display(), "already tidy");
            continue;
        }

        if !args.check {
            std::fs::write(file, &tidied).map_err(|e| CliError::Io {
                path: file.clone(),
                source: e,
            })?;
            output.status(&format!("  tidied {}", file.display()));
        }
        changed.push(file.clone());
    }

    if args.check && !changed.is_empty() {
        if output.mode != OutputMode::Json {
            for file in &changed {
                println!("{}", file.display());
            }
        }
        return Err(CliError::TidyCheckFailed { files: changed });
    }

    match output.mode {
        OutputMode::Json => output.print_json(&serde_json::json!({
            "files": files.len(),
            "changed": changed
                .iter()
                .map(|f| f.display().to_string())
                .collect::<Vec<_>>(),
        })),
        OutputMode::Plain => println!("{}\t{}", files.len(), changed.len()),
        OutputMode::Human => output.success(&format!(
            "{} file(s) checked, {} rewritten",
            files.len(),
            changed.len()
        )),
    }
    Ok(())
}
