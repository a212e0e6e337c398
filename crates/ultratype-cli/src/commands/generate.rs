use std::path::{Path, PathBuf};

use ultratype_codegen::Language;
use ultratype_dsl::ParseOptions;

use crate::cli::{GenArgs, GlobalOpts};
use crate::commands::{discover_schema_files, parse_schema_file};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `gen` command: render every schema file with one generator.
///
/// Without an output directory the generated sources go to stdout, one
/// after another; otherwise each input `name.ut` becomes `name.<ext>`.
pub fn run(args: GenArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let language: Language = args.language.parse()?;
    let generator = language.generator();

    let options = ParseOptions {
        strict: args.strict || config.generate.strict,
    };
    let output_dir = args.output_dir.or_else(|| config.generate.output_dir.clone());
    let files = discover_schema_files(&args.paths, config.extension())?;

    let mut results: Vec<serde_json::Value> = Vec::new();
    for (i, file) in files.iter().enumerate() {
        let (_, model) = parse_schema_file(file, options)?;
        let code = generator
            .generate(&model)
            .map_err(|source| CliError::Generate {
                file: file.clone(),
                source,
            })?;

        match &output_dir {
            Some(dir) => {
                let target = output_path(dir, file, language)?;
                std::fs::create_dir_all(dir).map_err(|e| CliError::Io {
                    path: dir.clone(),
                    source: e,
                })?;
                std::fs::write(&target, &code).map_err(|e| CliError::Io {
                    path: target.clone(),
                    source: e,
                })?;
                match output.mode {
                    OutputMode::Json => results.push(serde_json::json!({
                        "file": file.display().to_string(),
                        "class": model.name.as_str(),
                        "output": target.display().to_string(),
                    })),
                    OutputMode::Plain => println!("{}\t{}", file.display(), target.display()),
                    OutputMode::Human => output.status(&format!(
                        "  {} -> {}",
                        file.display(),
                        target.display()
                    )),
                }
            }
            None => match output.mode {
                OutputMode::Json => results.push(serde_json::json!({
                    "file": file.display().to_string(),
                    "class": model.name.as_str(),
                    "source": code,
                })),
                _ => {
                    if i > 0 {
                        output.emit("\n");
                    }
                    output.emit(&code);
                }
            },
        }
    }

    match output.mode {
        OutputMode::Json => output.print_json(&serde_json::json!({
            "language": language.identifier(),
            "files": results,
        })),
        _ => output.success(&format!(
            "generated {} {} file(s)",
            files.len(),
            language.identifier()
        )),
    }
    Ok(())
}

/// `out/` + `schemas/user.ut` + Go gives `out/user.go`.
fn output_path(dir: &Path, input: &Path, language: Language) -> Result<PathBuf, CliError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| CliError::Other(format!("cannot derive a file name from {}", input.display())))?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(language.extension());
    Ok(dir.join(name))
}
