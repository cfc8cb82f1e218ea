use std::env;
use std::path::PathBuf;

use evm_constants::{DEFAULT_STORE_DIR, HOME_ENV_VAR};
use evm_error::{Result, VersionManagerError};

/// Store root: `$EVM_HOME` when set, `~/.evm` otherwise.
pub fn default_root() -> Result<PathBuf> {
    if let Some(root) = env::var_os(HOME_ENV_VAR) {
        return Ok(PathBuf::from(root));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_STORE_DIR))
        .ok_or_else(|| VersionManagerError::IoError("could not determine home directory".into()))
}
