use anyhow::Result;

use evm_store::VersionStore;

pub struct VersionHandler;

impl VersionHandler {
    pub fn handle_version() -> Result<i32> {
        let store = VersionStore::open_default()?;
        match store.current_version() {
            Some(version) => println!("{version}"),
            None => println!(),
        }
        Ok(0)
    }
}
