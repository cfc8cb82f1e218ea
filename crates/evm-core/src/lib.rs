pub mod activate;
pub mod install;
pub mod launch;
pub mod plugin;
pub mod tool;

pub use activate::Activator;
pub use install::InstallManager;
pub use launch::Launcher;
pub use plugin::{PluginAction, PluginBridge};
pub use tool::ExternalTool;

use std::path::Path;

use evm_error::Result;
use evm_store::VersionStore;
use evm_version::Version;

pub fn install_version(store: &VersionStore, version: &Version) -> Result<()> {
    let manager = InstallManager::new();
    manager.install(store, version)
}

pub fn switch_to(store: &VersionStore, version: &Version) -> Result<()> {
    Activator::switch_to(store, version)
}

pub fn start(store: &VersionStore, config_dir: Option<&Path>) -> Result<i32> {
    Launcher::start(store, config_dir)
}

pub fn run_plugin(store: &VersionStore, action: PluginAction, name: Option<&str>) -> Result<i32> {
    PluginBridge::run(store, action, name)
}
