use std::fs;
use std::path::{Path, PathBuf};

use evm_constants::APP_NAME;
use evm_error::{Result, VersionManagerError};
use evm_version::Version;

use crate::layout::default_root;

/// Filesystem-backed registry of installed versions.
///
/// The store root holds one `elasticsearch-{version}` directory per install
/// and a single `elasticsearch` symlink naming the active version. Directory
/// existence is the sole source of truth for "installed"; the symlink is the
/// only mutable state.
pub struct VersionStore {
    root: PathBuf,
}

impl VersionStore {
    pub fn open_default() -> Result<Self> {
        let store = Self::at(default_root()?);
        fs::create_dir_all(&store.root)?;
        Ok(store)
    }

    #[must_use]
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn install_dir(&self, version: &Version) -> PathBuf {
        self.root.join(format!("{APP_NAME}-{version}"))
    }

    /// Transient download location; owned by one installer invocation.
    #[must_use]
    pub fn artifact_path(&self, version: &Version) -> PathBuf {
        self.root.join(format!("{APP_NAME}-{version}.tar.gz"))
    }

    #[must_use]
    pub fn active_link(&self) -> PathBuf {
        self.root.join(APP_NAME)
    }

    #[must_use]
    pub fn is_installed(&self, version: &Version) -> bool {
        self.install_dir(version).is_dir()
    }

    /// Installed versions, descending by numeric comparison.
    pub fn list_installed(&self) -> Result<Vec<Version>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = format!("{APP_NAME}-");
        let mut versions = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            // file_type() does not follow symlinks, so the active link and
            // leftover artifacts are skipped here.
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(suffix) = name.to_str().and_then(|n| n.strip_prefix(&prefix)) else {
                continue;
            };
            if let Ok(version) = suffix.parse::<Version>() {
                versions.push(version);
            }
        }

        versions.sort_by(|a, b| b.cmp(a));
        Ok(versions)
    }

    /// None when the link is missing or dangling.
    #[must_use]
    pub fn current_version(&self) -> Option<Version> {
        let target = fs::read_link(self.active_link()).ok()?;
        let resolved = if target.is_absolute() {
            target
        } else {
            self.root.join(target)
        };
        if !resolved.is_dir() {
            return None;
        }

        let name = resolved.file_name()?.to_str()?;
        let prefix = format!("{APP_NAME}-");
        name.strip_prefix(&prefix)?.parse().ok()
    }

    /// Repoints the active link at `version` as an atomic swap: the new link
    /// is created under a staging name and renamed over the live one, so
    /// there is no window with the link missing.
    pub fn activate(&self, version: &Version) -> Result<()> {
        let target = self.install_dir(version);
        if !target.is_dir() {
            return Err(VersionManagerError::Link(format!(
                "{} does not exist",
                target.display()
            )));
        }

        let staged = self.root.join(format!(".{APP_NAME}.swap"));
        let _ = fs::remove_file(&staged);

        create_symlink(&target, &staged)
            .map_err(|e| VersionManagerError::Link(e.to_string()))?;

        if let Err(e) = fs::rename(&staged, self.active_link()) {
            let _ = fs::remove_file(&staged);
            return Err(VersionManagerError::Link(e.to_string()));
        }

        Ok(())
    }

    pub fn remove(&self, version: &Version) -> Result<()> {
        if self.current_version().as_ref() == Some(version) {
            return Err(VersionManagerError::InUse(version.to_string()));
        }
        if !self.is_installed(version) {
            return Err(VersionManagerError::NotFound(format!(
                "Version {version} is not installed"
            )));
        }

        fs::remove_dir_all(self.install_dir(version))?;
        Ok(())
    }
}

fn create_symlink(source: &Path, dest: &Path) -> std::io::Result<()> {
    #[cfg(target_family = "unix")]
    std::os::unix::fs::symlink(source, dest)?;

    #[cfg(target_family = "windows")]
    std::os::windows::fs::symlink_dir(source, dest)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn store_with(versions: &[&str]) -> (TempDir, VersionStore) {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::at(dir.path().to_path_buf());
        for version in versions {
            fs::create_dir_all(store.install_dir(&v(version))).unwrap();
        }
        (dir, store)
    }

    #[test]
    fn lists_installed_versions_descending() {
        let (_dir, store) = store_with(&["2.0.0", "10.0.0", "1.7.2", "5.3.1"]);
        let listed: Vec<String> = store
            .list_installed()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, ["10.0.0", "5.3.1", "2.0.0", "1.7.2"]);
    }

    #[test]
    fn listing_skips_the_active_link_and_foreign_entries() {
        let (_dir, store) = store_with(&["5.3.1"]);
        store.activate(&v("5.3.1")).unwrap();
        fs::write(store.root().join("elasticsearch-5.4.0.tar.gz"), b"junk").unwrap();
        fs::create_dir(store.root().join("not-a-version")).unwrap();

        let listed = store.list_installed().unwrap();
        assert_eq!(listed, [v("5.3.1")]);
    }

    #[test]
    fn current_version_is_none_on_fresh_store() {
        let (_dir, store) = store_with(&["5.3.1"]);
        assert_eq!(store.current_version(), None);
    }

    #[test]
    fn activate_points_the_link_at_the_install() {
        let (_dir, store) = store_with(&["5.3.1", "5.4.0"]);
        store.activate(&v("5.3.1")).unwrap();
        assert_eq!(store.current_version(), Some(v("5.3.1")));

        store.activate(&v("5.4.0")).unwrap();
        assert_eq!(store.current_version(), Some(v("5.4.0")));
    }

    #[test]
    fn activate_is_idempotent() {
        let (_dir, store) = store_with(&["5.3.1"]);
        store.activate(&v("5.3.1")).unwrap();
        store.activate(&v("5.3.1")).unwrap();
        assert_eq!(store.current_version(), Some(v("5.3.1")));
    }

    #[test]
    fn activate_of_missing_version_fails_and_keeps_the_link() {
        let (_dir, store) = store_with(&["5.3.1"]);
        store.activate(&v("5.3.1")).unwrap();

        let err = store.activate(&v("9.9.9")).unwrap_err();
        assert!(matches!(err, VersionManagerError::Link(_)));
        assert_eq!(store.current_version(), Some(v("5.3.1")));
    }

    #[test]
    fn dangling_link_reads_as_no_active_version() {
        let (_dir, store) = store_with(&["5.3.1"]);
        store.activate(&v("5.3.1")).unwrap();
        fs::remove_dir_all(store.install_dir(&v("5.3.1"))).unwrap();
        assert_eq!(store.current_version(), None);
    }

    #[test]
    fn remove_of_active_version_is_rejected() {
        let (_dir, store) = store_with(&["5.3.1", "5.4.0"]);
        store.activate(&v("5.4.0")).unwrap();

        let err = store.remove(&v("5.4.0")).unwrap_err();
        assert!(matches!(err, VersionManagerError::InUse(_)));
        assert!(store.is_installed(&v("5.4.0")));
    }

    #[test]
    fn remove_of_non_current_version_leaves_the_link_alone() {
        let (_dir, store) = store_with(&["5.3.1", "5.4.0"]);
        store.activate(&v("5.4.0")).unwrap();

        store.remove(&v("5.3.1")).unwrap();
        assert!(!store.is_installed(&v("5.3.1")));
        assert_eq!(store.current_version(), Some(v("5.4.0")));
    }

    #[test]
    fn remove_of_missing_version_is_not_found() {
        let (_dir, store) = store_with(&[]);
        let err = store.remove(&v("5.3.1")).unwrap_err();
        assert!(matches!(err, VersionManagerError::NotFound(_)));
    }
}
