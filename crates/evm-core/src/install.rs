use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use evm_constants::{APP_NAME, USER_AGENT};
use evm_error::{Result, VersionManagerError};
use evm_resolver::Resolver;
use evm_store::VersionStore;
use evm_version::Version;

pub struct InstallManager {
    resolver: Resolver,
    client: reqwest::blocking::Client,
}

impl InstallManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
            // No timeout here: the probe already ran, and large tarballs on
            // slow links take as long as they take.
            client: reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    /// Download, verify, extract, register. Any failure leaves the store
    /// without a partial install; the downloaded artifact never survives the
    /// invocation once the download step has run.
    pub fn install(&self, store: &VersionStore, version: &Version) -> Result<()> {
        if store.is_installed(version) {
            return Err(VersionManagerError::AlreadyInstalled(version.to_string()));
        }

        let urls = self.resolver.resolve(version)?;
        let first_install = store.current_version().is_none();
        let artifact = store.artifact_path(version);

        self.download(&urls.download_url, &artifact, version)?;

        let checksum = match self.fetch_checksum(&urls.checksum_url) {
            Ok(checksum) => checksum,
            Err(err) => {
                let _ = fs::remove_file(&artifact);
                return Err(err);
            }
        };
        verify_and_extract(store, version, &artifact, &checksum)?;

        if first_install {
            store.activate(version)?;
            evm_logger::info(&format!("{APP_NAME}-{version} is now active"));
        }

        Ok(())
    }

    fn download(&self, url: &str, artifact: &Path, version: &Version) -> Result<()> {
        evm_logger::update_line(&format!("Downloading {APP_NAME}-{version}..."));

        let outcome = self.fetch_to_file(url, artifact);
        if outcome.is_err() {
            let _ = fs::remove_file(artifact);
        } else {
            evm_logger::finish_line(&format!("Downloaded {APP_NAME}-{version}"));
        }
        outcome
    }

    fn fetch_to_file(&self, url: &str, path: &Path) -> Result<()> {
        let mut resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| VersionManagerError::Download(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(VersionManagerError::Download(format!(
                "HTTP {} for {url}",
                resp.status()
            )));
        }

        let mut file = fs::File::create(path)?;
        resp.copy_to(&mut file)
            .map_err(|e| VersionManagerError::Download(e.to_string()))?;
        Ok(())
    }

    /// A failed checksum fetch is an integrity problem, not a download
    /// problem: the artifact itself arrived but cannot be trusted.
    fn fetch_checksum(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| VersionManagerError::Integrity(format!("checksum fetch failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(VersionManagerError::Integrity(format!(
                "checksum fetch failed: HTTP {} for {url}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| VersionManagerError::Integrity(format!("checksum fetch failed: {e}")))?;

        // Upstream files are either a bare digest or `digest  filename`.
        body.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| VersionManagerError::Integrity("empty checksum file".into()))
    }
}

impl Default for InstallManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumes the downloaded artifact: verify its digest, extract into the
/// store, and delete the artifact on every path out. A corrupt download
/// must never leave a stale file for a later attempt to trip over.
fn verify_and_extract(
    store: &VersionStore,
    version: &Version,
    artifact: &Path,
    expected_checksum: &str,
) -> Result<()> {
    let outcome = verify_digest(artifact, expected_checksum, version)
        .and_then(|()| extract_into_store(store, version, artifact));
    let _ = fs::remove_file(artifact);
    outcome
}

fn verify_digest(artifact: &Path, expected: &str, version: &Version) -> Result<()> {
    let actual = file_sha1_hex(artifact)?;
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(VersionManagerError::Integrity(format!(
            "checksum mismatch for {APP_NAME}-{version}"
        )));
    }
    Ok(())
}

pub fn file_sha1_hex(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buf = [0u8; 8192];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Transactional extract: unpack into a staging directory inside the store
/// root, then rename the unpacked tree into place. An extraction failure
/// never leaves a partial install directory behind.
fn extract_into_store(store: &VersionStore, version: &Version, artifact: &Path) -> Result<()> {
    let staging = tempfile::tempdir_in(store.root())
        .map_err(|e| VersionManagerError::Extract(e.to_string()))?;

    let file =
        fs::File::open(artifact).map_err(|e| VersionManagerError::Extract(e.to_string()))?;
    let tar = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(tar);
    archive
        .unpack(staging.path())
        .map_err(|e| VersionManagerError::Extract(e.to_string()))?;

    let unpacked = locate_unpacked_root(staging.path(), version)?;
    fs::rename(&unpacked, store.install_dir(version))
        .map_err(|e| VersionManagerError::Extract(e.to_string()))?;
    Ok(())
}

fn locate_unpacked_root(staging: &Path, version: &Version) -> Result<PathBuf> {
    let expected = staging.join(format!("{APP_NAME}-{version}"));
    if expected.is_dir() {
        return Ok(expected);
    }

    // Top-level naming drifted across releases; accept a single unpacked
    // directory whatever it is called.
    let entries = fs::read_dir(staging)
        .map_err(|e| VersionManagerError::Extract(e.to_string()))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| VersionManagerError::Extract(e.to_string()))?;

    match entries.as_slice() {
        [entry] if entry.path().is_dir() => Ok(entry.path()),
        _ => Err(VersionManagerError::Extract(
            "unexpected archive layout".into(),
        )),
    }
}
