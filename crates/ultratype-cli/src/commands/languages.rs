use ultratype_codegen::Language;

use crate::output::{OutputContext, OutputMode};

/// Run the `languages` command: list every registered generator.
pub fn run(output: &OutputContext) {
    match output.mode {
        OutputMode::Json => {
            let languages: Vec<serde_json::Value> = Language::ALL
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "identifier": l.identifier(),
                        "aliases": l.aliases(),
                        "extension": l.extension(),
                    })
                })
                .collect();
            output.print_json(&serde_json::json!(languages));
        }
        OutputMode::Plain => {
            for l in Language::ALL {
                println!("{}\t{}\t{}", l.identifier(), l.aliases().join(","), l.extension());
            }
        }
        OutputMode::Human => {
            for l in Language::ALL {
                let aliases = &l.aliases()[1..];
                if aliases.is_empty() {
                    println!("{:<12} .{}", l.identifier(), l.extension());
                } else {
                    println!(
                        "{:<12} .{:<4} (also: {})",
                        l.identifier(),
                        l.extension(),
                        aliases.join(", ")
                    );
                }
            }
        }
    }
}
