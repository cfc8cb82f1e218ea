use anyhow::Result;
use owo_colors::OwoColorize;

use evm_constants::APP_NAME;
use evm_store::VersionStore;
use evm_version::Version;

pub struct InstallHandler;

impl InstallHandler {
    pub fn handle_install(version: &str) -> Result<i32> {
        let version: Version = version.parse()?;
        Self::print_header(&version);

        let store = VersionStore::open_default()?;
        evm_core::install_version(&store, &version)?;

        evm_logger::finish(&format!("Installed {APP_NAME}-{version}"));
        Ok(0)
    }

    fn print_header(version: &Version) {
        println!(
            "{} {} {}",
            "evm".bright_cyan().bold(),
            "install".bright_white(),
            version.to_string().bright_white()
        );
        println!();
    }
}
