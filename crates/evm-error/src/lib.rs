use std::fmt;

#[derive(Debug)]
pub enum VersionManagerError {
    Validation(String),
    NotFound(String),
    AlreadyInstalled(String),
    InUse(String),
    Download(String),
    Integrity(String),
    Extract(String),
    Link(String),
    NoActiveVersion,
    ToolNotFound(String),
    MissingArgument(String),
    InvalidPath(String),
    IoError(String),
}

impl fmt::Display for VersionManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(version) => {
                write!(f, "Invalid version '{version}', expected MAJOR.MINOR.PATCH")
            }
            Self::NotFound(msg) => {
                write!(f, "{msg}")
            }
            Self::AlreadyInstalled(version) => {
                write!(f, "Version {version} is already installed")
            }
            Self::InUse(version) => {
                write!(f, "Version {version} is in use, switch to another version first")
            }
            Self::Download(msg) => {
                write!(f, "Download failed: {msg}")
            }
            Self::Integrity(msg) => {
                write!(f, "Malformed binary: {msg}")
            }
            Self::Extract(msg) => {
                write!(f, "Failed to extract archive: {msg}")
            }
            Self::Link(msg) => {
                write!(f, "Failed to update active version link: {msg}")
            }
            Self::NoActiveVersion => {
                write!(f, "No active version, install or switch to one first")
            }
            Self::ToolNotFound(path) => {
                write!(f, "Plugin tool not found or not executable: {path}")
            }
            Self::MissingArgument(what) => {
                write!(f, "Missing argument: {what}")
            }
            Self::InvalidPath(path) => {
                write!(f, "Not a directory: {path}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for VersionManagerError {}

impl From<std::io::Error> for VersionManagerError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VersionManagerError>;
