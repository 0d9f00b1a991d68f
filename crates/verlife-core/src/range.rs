//! Configured window of API versions
//!
//! A [`VersionRange`] is built once at startup from the oldest version still
//! served (`start`) and the newest one (`current`). It answers which of those
//! versions a feature is supported or deprecated in.

use crate::error::{LifecycleError, Result};
use crate::lifecycle::FeatureLifecycle;
use crate::version::ApiVersion;
use serde::Serialize;

/// Every whole major version from `start` to `current`, inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    start: ApiVersion,
    current: ApiVersion,
    all_versions: Vec<ApiVersion>,
}

/// Versions an entity is advertised under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionSets {
    /// Versions the entity is live in (at most the current version)
    pub supported: Vec<ApiVersion>,
    /// Older versions the entity existed in
    pub deprecated: Vec<ApiVersion>,
}

impl VersionSets {
    /// True when the entity is neither supported nor deprecated anywhere.
    pub fn is_empty(&self) -> bool {
        self.supported.is_empty() && self.deprecated.is_empty()
    }
}

impl VersionRange {
    /// Create the range `start..=current`
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidConfiguration`] when `current < start`.
    pub fn new(start: u16, current: u16) -> Result<Self> {
        if current < start {
            return Err(LifecycleError::InvalidConfiguration { start, current });
        }

        let all_versions: Vec<ApiVersion> = (start..=current)
            .map(|major| ApiVersion::major(major.into()))
            .collect();
        trace_debug!(start, current, count = all_versions.len(), "version range configured");

        Ok(Self {
            start: ApiVersion::major(start.into()),
            current: ApiVersion::major(current.into()),
            all_versions,
        })
    }

    /// Oldest version in the range
    pub fn start(&self) -> ApiVersion {
        self.start
    }

    /// Newest version in the range; the only one ever advertised as supported
    pub fn current(&self) -> ApiVersion {
        self.current
    }

    /// All versions in ascending order
    pub fn all_versions(&self) -> &[ApiVersion] {
        &self.all_versions
    }

    /// Versions a feature introduced in `introduced_in` is supported in.
    ///
    /// The result is either empty or the current version.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidLifecycle`] when the feature is removed
    /// before, or in the same version as, it was introduced. A feature
    /// introduced after the current version is reported as unsupported
    /// without checking its removal.
    pub fn supported_versions(
        &self,
        introduced_in: ApiVersion,
        removed_as_of: Option<ApiVersion>,
    ) -> Result<Vec<ApiVersion>> {
        if introduced_in > self.current {
            return Ok(Vec::new());
        }

        let Some(removed_as_of) = removed_as_of else {
            return Ok(vec![self.current]);
        };

        if introduced_in > removed_as_of {
            return Err(LifecycleError::invalid_lifecycle(format!(
                "Cannot remove an API version ({}) before it has been introduced ({}).",
                removed_as_of, introduced_in
            )));
        }

        if introduced_in == removed_as_of {
            return Err(LifecycleError::invalid_lifecycle(format!(
                "Cannot remove an API version ({}) in the same version it has been introduced ({}).",
                removed_as_of, introduced_in
            )));
        }

        if removed_as_of > self.current {
            return Ok(vec![self.current]);
        }

        Ok(Vec::new())
    }

    /// Versions a feature is deprecated in.
    ///
    /// Without a removal, every version from `introduced_in` up to (but not
    /// including) the current version. With a removal, every version from
    /// `introduced_in` up to (but not including) `removed_as_of`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidArgument`] when `introduced_in` is absent.
    pub fn deprecated_versions(
        &self,
        introduced_in: Option<ApiVersion>,
        removed_as_of: Option<ApiVersion>,
    ) -> Result<Vec<ApiVersion>> {
        let introduced_in = introduced_in.ok_or_else(|| {
            LifecycleError::InvalidArgument("introduced_in cannot be absent.".to_string())
        })?;
        let upper = removed_as_of.unwrap_or(self.current);

        Ok(self
            .all_versions
            .iter()
            .copied()
            .filter(|v| *v >= introduced_in && *v < upper)
            .collect())
    }

    /// Supported and deprecated versions for a lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidArgument`] when the lifecycle has no
    /// introduced version, and the errors of [`Self::supported_versions`].
    pub fn version_sets(&self, lifecycle: &FeatureLifecycle) -> Result<VersionSets> {
        let introduced_in = lifecycle.introduced_in.ok_or_else(|| {
            LifecycleError::InvalidArgument("introduced_in cannot be absent.".to_string())
        })?;

        Ok(VersionSets {
            supported: self.supported_versions(introduced_in, lifecycle.removed_as_of)?,
            deprecated: self.deprecated_versions(Some(introduced_in), lifecycle.removed_as_of)?,
        })
    }
}
