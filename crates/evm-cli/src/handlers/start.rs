use std::path::Path;

use anyhow::Result;

use evm_store::VersionStore;

pub struct StartHandler;

impl StartHandler {
    /// Blocking foreground handoff: the server inherits our terminal and we
    /// exit with its status code once it terminates.
    pub fn handle_start(config_dir: Option<&Path>) -> Result<i32> {
        let store = VersionStore::open_default()?;
        let code = evm_core::start(&store, config_dir)?;
        Ok(code)
    }
}
