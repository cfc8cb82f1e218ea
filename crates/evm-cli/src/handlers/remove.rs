use anyhow::Result;

use evm_constants::APP_NAME;
use evm_store::VersionStore;
use evm_version::Version;

pub struct RemoveHandler;

impl RemoveHandler {
    pub fn handle_remove(version: &str) -> Result<i32> {
        let version: Version = version.parse()?;
        let store = VersionStore::open_default()?;

        store.remove(&version)?;
        evm_logger::success(&format!("Removed {APP_NAME}-{version}"));
        Ok(0)
    }
}
