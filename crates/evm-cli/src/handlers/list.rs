use anyhow::Result;
use owo_colors::OwoColorize;

use evm_store::VersionStore;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list() -> Result<i32> {
        let store = VersionStore::open_default()?;
        let versions = store.list_installed()?;

        if versions.is_empty() {
            evm_logger::warn("No versions installed yet, try: evm install <version>");
            return Ok(0);
        }

        let current = store.current_version();
        for version in versions {
            if Some(version) == current {
                println!(
                    "{} {}",
                    "*".bright_green().bold(),
                    version.to_string().bright_green()
                );
            } else {
                println!("  {version}");
            }
        }

        Ok(0)
    }
}
