//! API version value
//!
//! Versions are `major.minor` pairs. Lifecycle facts only ever set the major
//! component; the minor component is carried so that versions render the way
//! API consumers see them (`"2.0"`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An API version, ordered by `(major, minor)`
///
/// Serialized as its canonical `"major.minor"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ApiVersion {
    /// Major version number
    pub major: u32,
    /// Minor version number (always 0 for lifecycle facts)
    pub minor: u32,
}

impl ApiVersion {
    /// Create a new version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Create a version with only major number
    pub const fn major(major: u32) -> Self {
        Self::new(major, 0)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => self.minor.cmp(&other.minor),
            ord => ord,
        }
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ApiVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .unwrap_or(s);

        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut parts = s.split('.');
        let major = parse_component(parts.next())?;
        let minor = match parts.next() {
            Some(minor) => parse_component(Some(minor))?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(VersionParseError::InvalidFormat);
        }

        Ok(ApiVersion::new(major, minor))
    }
}

fn parse_component(part: Option<&str>) -> Result<u32, VersionParseError> {
    part.ok_or(VersionParseError::InvalidFormat)?
        .parse()
        .map_err(|_| VersionParseError::InvalidNumber)
}

/// Error type for version parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// Invalid number in version string
    #[error("invalid number in version")]
    InvalidNumber,
    /// Invalid version format
    #[error("invalid version format")]
    InvalidFormat,
    /// Empty version string
    #[error("empty version string")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(ApiVersion::major(0).to_string(), "0.0");
        assert_eq!(ApiVersion::major(1).to_string(), "1.0");
        assert_eq!(ApiVersion::major(10).to_string(), "10.0");
        assert_eq!(ApiVersion::new(2, 3).to_string(), "2.3");
    }

    #[test]
    fn test_version_comparison() {
        assert!(ApiVersion::major(2) > ApiVersion::major(1));
        assert!(ApiVersion::new(1, 1) > ApiVersion::major(1));
        assert!(ApiVersion::new(1, 9) < ApiVersion::major(2));
        assert!(ApiVersion::major(3) >= ApiVersion::major(3));
        assert!(ApiVersion::major(3) <= ApiVersion::major(3));
        assert_eq!(ApiVersion::major(1), ApiVersion::new(1, 0));
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!("1".parse::<ApiVersion>().unwrap(), ApiVersion::major(1));
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::major(2));
        assert_eq!("V2.0".parse::<ApiVersion>().unwrap(), ApiVersion::major(2));
        assert_eq!("1.2".parse::<ApiVersion>().unwrap(), ApiVersion::new(1, 2));
    }

    #[test]
    fn test_version_parsing_errors() {
        assert_eq!("".parse::<ApiVersion>(), Err(VersionParseError::Empty));
        assert_eq!("v".parse::<ApiVersion>(), Err(VersionParseError::Empty));
        assert_eq!("x".parse::<ApiVersion>(), Err(VersionParseError::InvalidNumber));
        assert_eq!("1.".parse::<ApiVersion>(), Err(VersionParseError::InvalidNumber));
        assert_eq!("1.2.3".parse::<ApiVersion>(), Err(VersionParseError::InvalidFormat));
    }

    #[test]
    fn test_version_serde() {
        let json = serde_json::to_string(&ApiVersion::major(3)).unwrap();
        assert_eq!(json, "\"3.0\"");

        let parsed: ApiVersion = serde_json::from_str("\"2.1\"").unwrap();
        assert_eq!(parsed, ApiVersion::new(2, 1));

        assert!(serde_json::from_str::<ApiVersion>("\"two\"").is_err());
    }
}
