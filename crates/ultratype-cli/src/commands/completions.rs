use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

/// Write the completion script for `args.shell` to stdout.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    let shell: Shell = args
        .shell
        .parse()
        .map_err(|e: String| CliError::Other(format!("unsupported shell: {e}")))?;

    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
