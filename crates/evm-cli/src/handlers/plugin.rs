use anyhow::Result;

use evm_core::PluginAction;
use evm_store::VersionStore;

use crate::commands::PluginCommands;

pub struct PluginHandler;

impl PluginHandler {
    /// Delegates to the active version's plugin tool and surfaces its exit
    /// code as our own.
    pub fn handle_plugin(command: PluginCommands) -> Result<i32> {
        let store = VersionStore::open_default()?;

        let (action, name) = match command {
            PluginCommands::List => (PluginAction::List, None),
            PluginCommands::Install { name } => (PluginAction::Install, name),
            PluginCommands::Remove { name } => (PluginAction::Remove, name),
        };

        let code = evm_core::run_plugin(&store, action, name.as_deref())?;
        Ok(code)
    }
}
