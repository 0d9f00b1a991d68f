//! Convention driven by `IntroducedIn` / `RemovedAsOf` attributes

use crate::builder::{ApiVersionConventionBuilder, ControllerVersionConvention, ConventionBuilder};
use verlife_core::{
    ApiVersion, AttributeAccessor, ControllerModel, LifecycleResolver, Resolution, Result,
    VersionRange,
};

/// Assigns versions to controllers from their lifecycle attributes
///
/// Only the current version is ever supported; every older version a
/// controller or action existed in is deprecated. Controllers without an
/// `IntroducedIn` attribute, or entirely outside the configured window, are
/// handed to the wrapped builder's own convention untouched.
///
/// # Example
///
/// ```rust
/// use verlife_conventions::{ConventionBuilder, IntroducedApiVersionConvention};
/// use verlife_core::{ApiVersion, ControllerModel};
///
/// let mut convention = IntroducedApiVersionConvention::new(1, 3).unwrap();
/// let mut controller = ControllerModel::new("values").with_introduced_in(2);
///
/// assert!(convention.apply_to(&mut controller).unwrap());
/// let versions = controller.versions.unwrap();
/// assert_eq!(versions.supported, vec![ApiVersion::major(3)]);
/// assert_eq!(versions.deprecated, vec![ApiVersion::major(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct IntroducedApiVersionConvention<B = ApiVersionConventionBuilder> {
    resolver: LifecycleResolver,
    builder: B,
}

impl IntroducedApiVersionConvention {
    /// Create the convention for versions `start..=current`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `current < start`.
    pub fn new(start: u16, current: u16) -> Result<Self> {
        Self::with_builder(start, current, ApiVersionConventionBuilder::new())
    }

    /// Create the convention from loaded configuration
    pub fn from_config(config: &verlife_core::VersioningConfig) -> Result<Self> {
        Ok(Self::with_range(config.range()?, ApiVersionConventionBuilder::new()))
    }
}

impl<B: ConventionBuilder> IntroducedApiVersionConvention<B> {
    /// Wrap an existing convention builder
    pub fn with_builder(start: u16, current: u16, builder: B) -> Result<Self> {
        Ok(Self::with_range(VersionRange::new(start, current)?, builder))
    }

    pub fn with_range(range: VersionRange, builder: B) -> Self {
        Self {
            resolver: LifecycleResolver::with_accessor(range, AttributeAccessor),
            builder,
        }
    }

    /// Every version in the configured window
    pub fn all_versions(&self) -> &[ApiVersion] {
        self.resolver.range().all_versions()
    }

    pub fn resolver(&self) -> &LifecycleResolver {
        &self.resolver
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn into_builder(self) -> B {
        self.builder
    }

    /// Apply the convention to every controller, in order.
    ///
    /// Returns how many controllers were handled.
    ///
    /// # Errors
    ///
    /// Stops at the first controller with invalid lifecycle attributes;
    /// controllers before it have already been annotated.
    pub fn apply_all(&mut self, controllers: &mut [ControllerModel]) -> Result<usize> {
        let mut handled = 0;
        for controller in controllers.iter_mut() {
            if self.apply_to(controller)? {
                handled += 1;
            }
        }
        trace_info!(controllers = controllers.len(), handled, "api version conventions applied");
        Ok(handled)
    }
}

impl<B: ConventionBuilder> ConventionBuilder for IntroducedApiVersionConvention<B> {
    fn controller(&mut self, controller: &str) -> &mut ControllerVersionConvention {
        self.builder.controller(controller)
    }

    fn apply_to(&mut self, controller: &mut ControllerModel) -> Result<bool> {
        let resolved = match self.resolver.resolve(controller)? {
            Resolution::Deferred => return self.builder.apply_to(controller),
            Resolution::Resolved(resolved) => resolved,
        };

        let convention = self.builder.controller(&controller.name);
        convention
            .has_api_versions(resolved.versions.supported.iter().copied())
            .has_deprecated_api_versions(resolved.versions.deprecated.iter().copied());

        for action in &resolved.actions {
            convention
                .action(&action.action)
                .has_api_versions(action.versions.supported.iter().copied())
                .has_deprecated_api_versions(action.versions.deprecated.iter().copied());
        }

        self.builder.apply_to(controller)?;

        Ok(true)
    }
}
