//! Versioning configuration with environment variable support.
//!
//! The only tunable parameters are the oldest version still served and the
//! current version. They are read once at startup. Loading them from the
//! environment requires the `config` feature.
//!
//! # Example
//!
//! ```ignore
//! use verlife_core::config::{load_dotenv, VersioningConfig};
//!
//! // API_VERSION_START=1
//! // API_VERSION_CURRENT=3
//! load_dotenv();
//! let config = VersioningConfig::from_env()?;
//! let range = config.range()?;
//! ```

use crate::error::LifecycleError;
use crate::range::VersionRange;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable prefix for `VersioningConfig::from_env`
pub const ENV_PREFIX: &str = "API_VERSION_";

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),

    /// The loaded values do not form a valid version range.
    #[error(transparent)]
    Range(#[from] LifecycleError),
}

/// Window of API versions served by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VersioningConfig {
    /// Oldest major version still served
    pub start: u16,
    /// Current major version
    pub current: u16,
}

impl VersioningConfig {
    pub fn new(start: u16, current: u16) -> Self {
        Self { start, current }
    }

    /// Build the version range described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidConfiguration`] when `current < start`.
    pub fn range(&self) -> Result<VersionRange, LifecycleError> {
        VersionRange::new(self.start, self.current)
    }
}

#[cfg(feature = "config")]
impl VersioningConfig {

    /// Load from `API_VERSION_START` and `API_VERSION_CURRENT`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is missing or not an integer
    /// between 0 and 65535.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_prefixed(ENV_PREFIX)
    }

    /// Load from `{prefix}START` and `{prefix}CURRENT`.
    pub fn from_env_prefixed(prefix: &str) -> Result<Self, ConfigError> {
        let config = envy::prefixed(prefix).from_env::<Self>()?;
        trace_info!(start = config.start, current = config.current, "loaded versioning configuration");
        Ok(config)
    }

    /// Load from an explicit list of `(name, value)` pairs using the default prefix.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?)
    }
}

/// Load environment variables from a `.env` file.
///
/// Missing files are ignored and existing variables take precedence.
#[cfg(feature = "config")]
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Load environment variables from a specific file path.
#[cfg(feature = "config")]
pub fn load_dotenv_from<P: AsRef<std::path::Path>>(path: P) {
    let _ = dotenvy::from_path(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "config")]
    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    #[cfg(feature = "config")]
    fn test_from_vars() {
        let config =
            VersioningConfig::from_vars(vars(&[("API_VERSION_START", "1"), ("API_VERSION_CURRENT", "3")]))
                .unwrap();

        assert_eq!(config, VersioningConfig::new(1, 3));
        assert_eq!(config.range().unwrap().all_versions().len(), 3);
    }

    #[test]
    #[cfg(feature = "config")]
    fn test_missing_variable() {
        let err = VersioningConfig::from_vars(vars(&[("API_VERSION_START", "1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    #[cfg(feature = "config")]
    fn test_invalid_number() {
        let err = VersioningConfig::from_vars(vars(&[
            ("API_VERSION_START", "-1"),
            ("API_VERSION_CURRENT", "3"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    #[cfg(feature = "config")]
    fn test_window_beyond_u16_rejected() {
        let err = VersioningConfig::from_vars(vars(&[
            ("API_VERSION_START", "0"),
            ("API_VERSION_CURRENT", "4294967295"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    #[cfg(feature = "config")]
    fn test_widest_window_from_vars() {
        let config = VersioningConfig::from_vars(vars(&[
            ("API_VERSION_START", "0"),
            ("API_VERSION_CURRENT", "65535"),
        ]))
        .unwrap();

        assert_eq!(config, VersioningConfig::new(0, u16::MAX));
        assert_eq!(config.range().unwrap().all_versions().len(), 65536);
    }

    #[test]
    fn test_inverted_range() {
        let err = VersioningConfig::new(3, 1).range().unwrap_err();
        assert_eq!(err, LifecycleError::InvalidConfiguration { start: 3, current: 1 });

        let err: ConfigError = err.into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
