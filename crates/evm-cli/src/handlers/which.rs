use anyhow::Result;

use evm_store::VersionStore;
use evm_version::Version;

pub struct WhichHandler;

impl WhichHandler {
    /// A miss prints "not found" and still reports success; this is an
    /// informational query, not a failure.
    pub fn handle_which(version: Option<&str>) -> Result<i32> {
        let store = VersionStore::open_default()?;

        let version = match version {
            Some(raw) => Some(raw.parse::<Version>()?),
            None => store.current_version(),
        };

        match version.filter(|v| store.is_installed(v)) {
            Some(version) => println!("{}", store.install_dir(&version).display()),
            None => println!("not found"),
        }

        Ok(0)
    }
}
