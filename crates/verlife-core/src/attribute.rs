//! Lifecycle attributes attached to controllers and actions

use crate::version::ApiVersion;
use serde::{Deserialize, Serialize};

/// A declarative lifecycle fact
///
/// Apply `IntroducedIn` to a controller before applying either attribute to
/// its actions; an action without its own facts inherits the controller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleAttribute {
    /// The version the controller or action was introduced in
    IntroducedIn(ApiVersion),
    /// The version the controller or action is removed as of
    RemovedAsOf(ApiVersion),
}

impl LifecycleAttribute {
    /// `IntroducedIn` for a major version
    pub fn introduced_in(major: u32) -> Self {
        Self::IntroducedIn(ApiVersion::major(major))
    }

    /// `RemovedAsOf` for a major version
    pub fn removed_as_of(major: u32) -> Self {
        Self::RemovedAsOf(ApiVersion::major(major))
    }

    /// The version carried by the attribute
    pub fn version(&self) -> ApiVersion {
        match self {
            Self::IntroducedIn(version) | Self::RemovedAsOf(version) => *version,
        }
    }

    /// Attribute name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntroducedIn(_) => "IntroducedIn",
            Self::RemovedAsOf(_) => "RemovedAsOf",
        }
    }
}
