use anyhow::Result;

use evm_constants::APP_NAME;
use evm_store::VersionStore;
use evm_version::Version;

pub struct UseHandler;

impl UseHandler {
    pub fn handle_use(version: &str) -> Result<i32> {
        let version: Version = version.parse()?;
        let store = VersionStore::open_default()?;

        evm_core::switch_to(&store, &version)?;
        evm_logger::success(&format!("Now using {APP_NAME}-{version}"));
        Ok(0)
    }
}
