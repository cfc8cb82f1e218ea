use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use evm_error::VersionManagerError;

/// Release generations that share URL layout, checksum naming, plugin tool
/// path and start-time flag syntax. 3.x and 4.x were never released as
/// tarballs; they classify with the nearest scheme and the upstream
/// existence probe rejects them anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    /// 1.x (and the pre-1.0 era): flat download repository.
    Legacy,
    /// 2.x: path-per-version repository.
    Mid,
    /// 5.x and above: artifacts host.
    Modern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch {
    Number(u32),
    /// `M.N.*`, accepted by validation; orders after every concrete patch.
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: Patch,
}

impl Version {
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: Patch) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    #[must_use]
    pub fn major(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        match self.major {
            0 | 1 => Epoch::Legacy,
            2..=4 => Epoch::Mid,
            _ => Epoch::Modern,
        }
    }
}

fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for Version {
    type Err = VersionManagerError;

    /// Accepts exactly `MAJOR.MINOR.PATCH` where PATCH may be `*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionManagerError::Validation(s.to_string());

        let mut segments = s.split('.');
        let major = segments.next().and_then(parse_segment).ok_or_else(invalid)?;
        let minor = segments.next().and_then(parse_segment).ok_or_else(invalid)?;
        let patch = match segments.next().ok_or_else(invalid)? {
            "*" => Patch::Wildcard,
            other => Patch::Number(parse_segment(other).ok_or_else(invalid)?),
        };
        if segments.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Patch::Number(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            Patch::Wildcard => write!(f, "{}.{}.*", self.major, self.minor),
        }
    }
}

impl Ord for Patch {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Wildcard, Self::Wildcard) => Ordering::Equal,
            (Self::Wildcard, Self::Number(_)) => Ordering::Greater,
            (Self::Number(_), Self::Wildcard) => Ordering::Less,
        }
    }
}

impl PartialOrd for Patch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Numeric segment-wise comparison, never lexical: 10.0.0 > 2.0.0.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
