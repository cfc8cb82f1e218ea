use evm_error::{Result, VersionManagerError};
use evm_store::VersionStore;
use evm_version::Version;

pub struct Activator;

impl Activator {
    /// Makes `version` the active one. Idempotent when it already is.
    pub fn switch_to(store: &VersionStore, version: &Version) -> Result<()> {
        if !store.is_installed(version) {
            return Err(VersionManagerError::NotFound(format!(
                "Version {version} is not installed"
            )));
        }
        store.activate(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn switching_to_a_missing_version_never_touches_the_link() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::at(dir.path().to_path_buf());
        fs::create_dir_all(store.install_dir(&v("5.3.1"))).unwrap();
        store.activate(&v("5.3.1")).unwrap();

        let err = Activator::switch_to(&store, &v("5.4.0")).unwrap_err();
        assert!(matches!(err, VersionManagerError::NotFound(_)));
        assert_eq!(store.current_version(), Some(v("5.3.1")));
    }

    #[test]
    fn switching_between_installed_versions() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::at(dir.path().to_path_buf());
        for version in ["5.3.1", "5.4.0"] {
            fs::create_dir_all(store.install_dir(&v(version))).unwrap();
        }

        Activator::switch_to(&store, &v("5.3.1")).unwrap();
        assert_eq!(store.current_version(), Some(v("5.3.1")));

        Activator::switch_to(&store, &v("5.4.0")).unwrap();
        assert_eq!(store.current_version(), Some(v("5.4.0")));
    }
}
