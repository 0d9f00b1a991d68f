//! API version conventions for verlife
//!
//! This crate connects lifecycle resolution to the host framework's version
//! model. The host side is abstracted by [`ConventionBuilder`]; the
//! [`IntroducedApiVersionConvention`] resolves each controller's
//! `IntroducedIn` / `RemovedAsOf` attributes and writes the result through
//! that seam, or leaves the controller to the builder's default convention
//! when it carries no lifecycle the convention manages.
//!
//! # Example
//!
//! ```rust
//! use verlife_conventions::IntroducedApiVersionConvention;
//! use verlife_core::{ActionModel, ApiVersion, ControllerModel};
//!
//! let mut convention = IntroducedApiVersionConvention::new(1, 3).unwrap();
//!
//! let mut controllers = vec![
//!     ControllerModel::new("values")
//!         .with_introduced_in(1)
//!         .with_removed_as_of(3)
//!         .with_action(ActionModel::new("get")),
//!     ControllerModel::new("health"),
//! ];
//!
//! assert_eq!(convention.apply_all(&mut controllers).unwrap(), 2);
//!
//! let values = controllers[0].versions.as_ref().unwrap();
//! assert!(values.supported.is_empty());
//! assert_eq!(values.deprecated, vec![ApiVersion::major(1), ApiVersion::major(2)]);
//!
//! // no lifecycle attributes: default convention
//! let health = controllers[1].versions.as_ref().unwrap();
//! assert_eq!(health.supported, vec![ApiVersion::major(1)]);
//! ```

#[macro_use]
mod tracing_macros;

mod builder;
mod introduced;

pub use builder::{
    ActionVersionConvention, ApiVersionConventionBuilder, ControllerVersionConvention,
    ConventionBuilder,
};
pub use introduced::IntroducedApiVersionConvention;
