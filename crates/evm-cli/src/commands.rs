use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = evm_constants::BIN_NAME)]
#[command(version = evm_constants::VERSION)]
#[command(about = evm_constants::DESCRIPTION, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists installed versions, marking the active one
    #[command(alias = "ls")]
    List,
    /// Prints the active version, or an empty line when none is active
    Version,
    /// Downloads, verifies and installs a version
    Install {
        /// Version to install (e.g. 5.3.1)
        version: String,
    },
    /// Switches the active version
    Use {
        /// Version to activate
        version: String,
    },
    /// Removes an installed version
    #[command(alias = "rm")]
    Remove {
        /// Version to remove
        version: String,
    },
    /// Prints the install path of a version (default: the active one)
    Which {
        version: Option<String>,
    },
    /// Delegates to the active version's own plugin tool
    Plugin {
        #[command(subcommand)]
        action: PluginCommands,
    },
    /// Starts the active version in the foreground
    Start {
        /// Configuration directory to pass to the server
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PluginCommands {
    /// Lists installed plugins
    List,
    /// Installs a plugin
    Install { name: Option<String> },
    /// Removes a plugin
    Remove { name: Option<String> },
}
