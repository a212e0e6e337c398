mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::error::ExitCode;

fn main() {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.global.verbose, cli.global.quiet);
    let output = output::OutputContext::from_global(&cli.global);

    let result = match cli.command {
        cli::Commands::Gen(args) => commands::generate::run(args, &cli.global, &output),
        cli::Commands::Tidy(args) => commands::tidy::run(args, &cli.global, &output),
        cli::Commands::Check(args) => commands::check::run(args, &cli.global, &output),
        cli::Commands::Languages => {
            commands::languages::run(&output);
            Ok(())
        }
        cli::Commands::Completions(args) => commands::completions::run(args),
        cli::Commands::External(args) => {
            tracing::debug!(?args, "ignoring unrecognized command");
            Ok(())
        }
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
