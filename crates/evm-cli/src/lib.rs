pub mod commands;
pub mod handlers;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use commands::{Cli, Commands};
use handlers::{
    InstallHandler, ListHandler, PluginHandler, RemoveHandler, StartHandler, UseHandler,
    VersionHandler, WhichHandler,
};

/// Parses the command line, dispatches, and returns the process exit code.
pub fn run_cli() -> i32 {
    evm_logger::init_logger(false);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err),
    };

    let Some(command) = cli.command else {
        print_usage();
        return 0;
    };

    let outcome = match command {
        Commands::List => ListHandler::handle_list(),
        Commands::Version => VersionHandler::handle_version(),
        Commands::Install { version } => InstallHandler::handle_install(&version),
        Commands::Use { version } => UseHandler::handle_use(&version),
        Commands::Remove { version } => RemoveHandler::handle_remove(&version),
        Commands::Which { version } => WhichHandler::handle_which(version.as_deref()),
        Commands::Plugin { action } => PluginHandler::handle_plugin(action),
        Commands::Start { config } => StartHandler::handle_start(config.as_deref()),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            evm_logger::error(&err.to_string());
            1
        }
    }
}

fn print_usage() {
    let _ = Cli::command().print_help();
}

fn handle_parse_error(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        // An unknown subcommand prints usage and reports success; malformed
        // arguments to a known subcommand are real failures.
        ErrorKind::InvalidSubcommand => {
            print_usage();
            0
        }
        _ => {
            let _ = err.print();
            1
        }
    }
}
