//! Version lifecycle resolution for versioned APIs
//!
//! This crate decides, for every controller and action of an API, which
//! versions it is currently reachable under and which of those are
//! deprecated. The decision is driven by two declarative facts attached to
//! controllers and actions:
//!
//! - `IntroducedIn(N)`: the first major version the endpoint exists in
//! - `RemovedAsOf(N)`: the first major version the endpoint no longer exists in
//!
//! Given a configured window of versions (`start..=current`), only the
//! current version is ever advertised as supported. Every older version the
//! endpoint existed in is advertised as deprecated.
//!
//! # Example
//!
//! ```rust
//! use verlife_core::{ControllerModel, ActionModel, LifecycleResolver, Resolution, ApiVersion};
//!
//! let resolver = LifecycleResolver::new(1, 3).unwrap();
//!
//! let controller = ControllerModel::new("values")
//!     .with_introduced_in(1)
//!     .with_action(ActionModel::new("get"));
//!
//! match resolver.resolve(&controller).unwrap() {
//!     Resolution::Resolved(resolved) => {
//!         assert_eq!(resolved.versions.supported, vec![ApiVersion::major(3)]);
//!         assert_eq!(
//!             resolved.versions.deprecated,
//!             vec![ApiVersion::major(1), ApiVersion::major(2)]
//!         );
//!     }
//!     Resolution::Deferred => unreachable!(),
//! }
//! ```

#[macro_use]
mod tracing_macros;

mod attribute;
pub mod config;
mod error;
mod lifecycle;
mod metadata;
mod model;
mod range;
mod resolver;
mod version;

pub use attribute::LifecycleAttribute;
pub use error::{LifecycleError, Result};
pub use lifecycle::FeatureLifecycle;
pub use metadata::{AttributeAccessor, HasAttributes, MetadataAccessor};
pub use model::{ActionModel, ApiVersionModel, ControllerModel};
pub use range::{VersionRange, VersionSets};
pub use resolver::{ActionResolution, ControllerResolution, LifecycleResolver, Resolution};
pub use config::{ConfigError, VersioningConfig};
pub use version::{ApiVersion, VersionParseError};
