use std::time::Duration;

use evm_constants::{
    APP_NAME, CHECKSUM_SUFFIX, LEGACY_CHECKSUM_SUFFIX, LEGACY_DOWNLOAD_ROOT, MID_DOWNLOAD_ROOT,
    MODERN_DOWNLOAD_ROOT, PROBE_TIMEOUT_SECS, USER_AGENT,
};
use evm_error::{Result, VersionManagerError};
use evm_version::{Epoch, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub download_url: String,
    pub checksum_url: String,
}

/// URL construction is pure; only `Resolver::resolve` touches the network.
#[must_use]
pub fn artifact_urls(version: &Version) -> ResolvedArtifact {
    let tarball = format!("{APP_NAME}-{version}.tar.gz");

    let download_url = match version.epoch() {
        Epoch::Legacy => format!("{LEGACY_DOWNLOAD_ROOT}/{tarball}"),
        Epoch::Mid => format!("{MID_DOWNLOAD_ROOT}/{version}/{tarball}"),
        Epoch::Modern => format!("{MODERN_DOWNLOAD_ROOT}/{tarball}"),
    };

    let checksum_suffix = match version.epoch() {
        Epoch::Legacy => LEGACY_CHECKSUM_SUFFIX,
        Epoch::Mid | Epoch::Modern => CHECKSUM_SUFFIX,
    };

    ResolvedArtifact {
        checksum_url: format!("{download_url}{checksum_suffix}"),
        download_url,
    }
}

pub struct Resolver {
    client: reqwest::blocking::Client,
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    /// Maps a version to its download and checksum URLs, probing upstream
    /// once so a nonexistent release fails fast instead of after a full
    /// download attempt. The checksum URL is returned unprobed; the
    /// installer treats a failed checksum fetch separately.
    pub fn resolve(&self, version: &Version) -> Result<ResolvedArtifact> {
        let urls = artifact_urls(version);

        match self.client.head(&urls.download_url).send() {
            Ok(resp) if resp.status().is_success() => Ok(urls),
            Ok(_) => Err(VersionManagerError::NotFound(format!(
                "Version {version} not found upstream"
            ))),
            Err(e) => Err(VersionManagerError::Download(e.to_string())),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(version: &str) -> ResolvedArtifact {
        artifact_urls(&version.parse().unwrap())
    }

    #[test]
    fn legacy_epoch_uses_the_flat_repo_and_txt_checksums() {
        let resolved = urls("1.7.2");
        assert_eq!(
            resolved.download_url,
            "https://download.elastic.co/elasticsearch/elasticsearch/elasticsearch-1.7.2.tar.gz"
        );
        assert_eq!(
            resolved.checksum_url,
            "https://download.elastic.co/elasticsearch/elasticsearch/elasticsearch-1.7.2.tar.gz.sha1.txt"
        );
    }

    #[test]
    fn mid_epoch_uses_the_per_version_repo() {
        let resolved = urls("2.4.6");
        assert_eq!(
            resolved.download_url,
            "https://download.elastic.co/elasticsearch/release/org/elasticsearch/distribution/tar/elasticsearch/2.4.6/elasticsearch-2.4.6.tar.gz"
        );
        assert_eq!(
            resolved.checksum_url,
            "https://download.elastic.co/elasticsearch/release/org/elasticsearch/distribution/tar/elasticsearch/2.4.6/elasticsearch-2.4.6.tar.gz.sha1"
        );
    }

    #[test]
    fn modern_epoch_uses_the_artifacts_host() {
        let resolved = urls("5.3.1");
        assert_eq!(
            resolved.download_url,
            "https://artifacts.elastic.co/downloads/elasticsearch/elasticsearch-5.3.1.tar.gz"
        );
        assert_eq!(
            resolved.checksum_url,
            "https://artifacts.elastic.co/downloads/elasticsearch/elasticsearch-5.3.1.tar.gz.sha1"
        );
    }
}
