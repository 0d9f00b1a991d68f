//! # verlife
//!
//! Declarative API version lifecycles.
//!
//! Controllers and actions declare the major version they were introduced in
//! and, optionally, the version they were removed as of. Given the oldest
//! version still served and the current version, verlife works out which
//! versions every endpoint is reachable under: the current version is the
//! only supported one, every older version is deprecated.
//!
//! ## Quick Start
//!
//! ```rust
//! use verlife::prelude::*;
//!
//! let mut convention = IntroducedApiVersionConvention::new(1, 3).unwrap();
//!
//! let mut controllers = vec![
//!     ControllerModel::new("values")
//!         .with_introduced_in(1)
//!         .with_action(ActionModel::new("get"))
//!         .with_action(ActionModel::new("get_by_id").with_introduced_in(2)),
//! ];
//!
//! convention.apply_all(&mut controllers).unwrap();
//!
//! let get_by_id = controllers[0].action("get_by_id").unwrap();
//! let versions = get_by_id.versions.as_ref().unwrap();
//! assert_eq!(versions.supported, vec![ApiVersion::major(3)]);
//! assert_eq!(versions.deprecated, vec![ApiVersion::major(2)]);
//! ```
//!
//! ## Optional Features
//!
//! - `tracing` - emit diagnostics through `tracing` (enabled by default)
//! - `config` - load the version window from `API_VERSION_START` and
//!   `API_VERSION_CURRENT`, with `.env` file support (enabled by default)

// Re-export core functionality
pub use verlife_core::*;

// Re-export the convention layer
pub use verlife_conventions::*;

// Re-export commonly used external crates
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module - import everything you need with `use verlife::prelude::*`
pub mod prelude {
    pub use verlife_core::{
        // Model
        ActionModel,
        ApiVersion,
        ApiVersionModel,
        ControllerModel,
        // Lifecycle
        FeatureLifecycle,
        LifecycleAttribute,
        // Error handling
        LifecycleError,
        // Resolution
        LifecycleResolver,
        Resolution,
        Result,
        VersionRange,
        VersionSets,
    };

    pub use verlife_conventions::{
        ApiVersionConventionBuilder, ConventionBuilder, IntroducedApiVersionConvention,
    };

    pub use verlife_core::{ConfigError, VersioningConfig};

    #[cfg(feature = "config")]
    pub use verlife_core::config::{load_dotenv, load_dotenv_from};

    // Re-export serde for convenience
    pub use serde::{Deserialize, Serialize};
}
