pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "A version manager for Elasticsearch";
pub const BIN_NAME: &str = "evm";

/// Name of the managed application; install directories are
/// `{APP_NAME}-{version}` and the active-version symlink is `{APP_NAME}`.
pub const APP_NAME: &str = "elasticsearch";

/// Overrides the store root when set; otherwise `~/.evm` is used.
pub const HOME_ENV_VAR: &str = "EVM_HOME";
pub const DEFAULT_STORE_DIR: &str = ".evm";

pub const USER_AGENT: &str = "evm/0.1.0";

/// Timeout for the upstream existence probe only; downloads are unbounded.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// 1.x releases: single flat repository.
pub const LEGACY_DOWNLOAD_ROOT: &str =
    "https://download.elastic.co/elasticsearch/elasticsearch";
/// 2.x releases: path-per-version maven-style repository.
pub const MID_DOWNLOAD_ROOT: &str =
    "https://download.elastic.co/elasticsearch/release/org/elasticsearch/distribution/tar/elasticsearch";
/// 5.x and above: artifacts host.
pub const MODERN_DOWNLOAD_ROOT: &str =
    "https://artifacts.elastic.co/downloads/elasticsearch";

pub const LEGACY_CHECKSUM_SUFFIX: &str = ".sha1.txt";
pub const CHECKSUM_SUFFIX: &str = ".sha1";
