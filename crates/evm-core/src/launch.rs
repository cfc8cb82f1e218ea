use std::path::Path;

use evm_constants::APP_NAME;
use evm_error::{Result, VersionManagerError};
use evm_store::VersionStore;
use evm_version::{Epoch, Version};

use crate::tool::ExternalTool;

pub struct Launcher;

impl Launcher {
    /// Starts the active version in the foreground and returns its exit
    /// code. The config directory is validated before anything is spawned.
    pub fn start(store: &VersionStore, config_dir: Option<&Path>) -> Result<i32> {
        if let Some(dir) = config_dir {
            if !dir.is_dir() {
                return Err(VersionManagerError::InvalidPath(
                    dir.display().to_string(),
                ));
            }
        }

        let version = store
            .current_version()
            .ok_or(VersionManagerError::NoActiveVersion)?;

        let tool = Self::build_invocation(store, &version, config_dir);
        evm_logger::info(&format!("Starting {APP_NAME}-{version}..."));
        tool.run_foreground()
    }

    /// The config flag syntax changed with 5.0: `-Des.path.conf=` before,
    /// `-Epath.conf=` after.
    #[must_use]
    pub fn build_invocation(
        store: &VersionStore,
        version: &Version,
        config_dir: Option<&Path>,
    ) -> ExternalTool {
        let binary = store.install_dir(version).join("bin").join(APP_NAME);
        let mut tool = ExternalTool::new(binary);

        if let Some(dir) = config_dir {
            let flag = match version.epoch() {
                Epoch::Legacy | Epoch::Mid => format!("-Des.path.conf={}", dir.display()),
                Epoch::Modern => format!("-Epath.conf={}", dir.display()),
            };
            tool = tool.arg(flag);
        }

        tool
    }
}
