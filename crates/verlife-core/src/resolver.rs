//! Lifecycle resolution for controllers and their actions
//!
//! Resolution of a controller moves through these states:
//!
//! ```text
//! Unresolved ──► Deferred                       (no facts this resolver manages)
//! Unresolved ──► Validated ──► Resolved         (controller, then every action)
//! Unresolved ──► error                          (invalid or duplicated facts)
//! ```
//!
//! Actions inherit the controller's resolved lifecycle field by field: an
//! action's own `IntroducedIn` or `RemovedAsOf` always wins over the
//! controller's, independently of the other field.

use crate::error::{LifecycleError, Result};
use crate::lifecycle::FeatureLifecycle;
use crate::metadata::{AttributeAccessor, MetadataAccessor};
use crate::model::{ActionModel, ControllerModel};
use crate::range::{VersionRange, VersionSets};
use serde::Serialize;

/// Resolved versions of one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResolution {
    /// Action name
    pub action: String,
    /// Effective lifecycle after inheriting from the controller
    pub lifecycle: FeatureLifecycle,
    pub versions: VersionSets,
}

/// Resolved versions of a controller and all of its actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerResolution {
    /// Controller name
    pub controller: String,
    /// Lifecycle declared on the controller
    pub lifecycle: FeatureLifecycle,
    pub versions: VersionSets,
    /// Actions in declaration order
    pub actions: Vec<ActionResolution>,
}

impl ControllerResolution {
    /// Look up an action's resolution by name
    pub fn action(&self, name: &str) -> Option<&ActionResolution> {
        self.actions.iter().find(|a| a.action == name)
    }
}

/// Outcome of resolving a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The controller is outside the managed window; the host's default
    /// convention should assign its versions.
    Deferred,
    /// Versions computed for the controller and every action
    Resolved(ControllerResolution),
}

impl Resolution {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }

    /// The resolved controller, or `None` when deferred
    pub fn resolved(&self) -> Option<&ControllerResolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            Self::Deferred => None,
        }
    }
}

/// Computes supported and deprecated versions from lifecycle facts
///
/// The resolver owns an immutable [`VersionRange`] and holds no other state,
/// so one instance can be shared across threads and used for every
/// controller of an application.
#[derive(Debug, Clone)]
pub struct LifecycleResolver<A = AttributeAccessor> {
    range: VersionRange,
    accessor: A,
}

impl LifecycleResolver {
    /// Create a resolver for `start..=current` reading [`LifecycleAttribute`]s
    ///
    /// [`LifecycleAttribute`]: crate::LifecycleAttribute
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidConfiguration`] when `current < start`.
    pub fn new(start: u16, current: u16) -> Result<Self> {
        Ok(Self::with_accessor(VersionRange::new(start, current)?, AttributeAccessor))
    }
}

impl<A> LifecycleResolver<A> {
    /// Create a resolver over an existing range with a custom metadata accessor
    pub fn with_accessor(range: VersionRange, accessor: A) -> Self {
        Self { range, accessor }
    }

    pub fn range(&self) -> &VersionRange {
        &self.range
    }

    /// Whether a controller with this lifecycle is left to the default convention.
    ///
    /// That is the case when the controller declares no introduced version,
    /// is introduced after the current version, or was removed at or before
    /// the start version.
    pub fn should_defer(&self, lifecycle: &FeatureLifecycle) -> bool {
        match lifecycle.introduced_in {
            None => true,
            Some(introduced_in) if introduced_in > self.range.current() => true,
            Some(_) => lifecycle
                .removed_as_of
                .is_some_and(|removed_as_of| removed_as_of <= self.range.start()),
        }
    }
}

impl<A> LifecycleResolver<A>
where
    A: MetadataAccessor<ControllerModel> + MetadataAccessor<ActionModel>,
{
    /// Resolve a controller and all of its actions.
    ///
    /// # Errors
    ///
    /// Any invalid or duplicated fact on the controller or one of its actions
    /// aborts resolution of the whole controller.
    pub fn resolve(&self, controller: &ControllerModel) -> Result<Resolution> {
        let lifecycle = self.controller_lifecycle(controller)?;

        if self.should_defer(&lifecycle) {
            trace_debug!(
                controller = %controller.name,
                introduced_in = ?lifecycle.introduced_in,
                removed_as_of = ?lifecycle.removed_as_of,
                "controller outside managed versions, deferring to default convention"
            );
            return Ok(Resolution::Deferred);
        }

        let versions = self.range.version_sets(&lifecycle)?;

        let actions = controller
            .actions
            .iter()
            .map(|action| self.resolve_action(&controller.name, &lifecycle, action))
            .collect::<Result<Vec<_>>>()?;

        trace_debug!(
            controller = %controller.name,
            supported = ?versions.supported,
            deprecated = ?versions.deprecated,
            actions = actions.len(),
            "controller versions resolved"
        );

        Ok(Resolution::Resolved(ControllerResolution {
            controller: controller.name.clone(),
            lifecycle,
            versions,
            actions,
        }))
    }

    /// Extract and validate the lifecycle declared on a controller.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::MultipleDeclarations`] or
    /// [`LifecycleError::InvalidLifecycle`].
    pub fn controller_lifecycle(&self, controller: &ControllerModel) -> Result<FeatureLifecycle> {
        let lifecycle = FeatureLifecycle::extract(&self.accessor, controller)?;
        if let Err(err) = lifecycle.validate(&controller.name) {
            trace_warn!(controller = %controller.name, error = %err, "invalid controller lifecycle");
            return Err(err);
        }
        Ok(lifecycle)
    }

    /// Resolve one action against its controller's lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidLifecycle`] when the action is
    /// introduced before its controller or its effective lifecycle removes it
    /// in or before the version it is introduced in.
    pub fn resolve_action(
        &self,
        controller_name: &str,
        controller: &FeatureLifecycle,
        action: &ActionModel,
    ) -> Result<ActionResolution> {
        let declared = FeatureLifecycle::extract(&self.accessor, action)?;

        if let (Some(action_introduced), Some(controller_introduced)) =
            (declared.introduced_in, controller.introduced_in)
        {
            if action_introduced < controller_introduced {
                trace_warn!(
                    controller = controller_name,
                    action = %action.name,
                    "action introduced before its controller"
                );
                return Err(LifecycleError::invalid_lifecycle(format!(
                    "Action ({}) version cannot be introduced before controller ({}) version.",
                    action.name, controller_name
                )));
            }
        }

        let lifecycle = declared.inherit_from(controller);
        if let Err(err) = lifecycle.validate(&format!("{}.{}", controller_name, action.name)) {
            trace_warn!(action = %action.name, error = %err, "invalid action lifecycle");
            return Err(err);
        }

        Ok(ActionResolution {
            action: action.name.clone(),
            lifecycle,
            versions: self.range.version_sets(&lifecycle)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::ApiVersion;

    fn v(major: u32) -> ApiVersion {
        ApiVersion::major(major)
    }

    fn resolved(resolver: &LifecycleResolver, controller: &ControllerModel) -> ControllerResolution {
        match resolver.resolve(controller).unwrap() {
            Resolution::Resolved(resolution) => resolution,
            Resolution::Deferred => panic!("controller {} was deferred", controller.name),
        }
    }

    fn stub_controller() -> ControllerModel {
        ControllerModel::new("stub")
    }

    fn stub_action() -> ActionModel {
        ActionModel::new("get")
    }

    #[test]
    fn test_defers_without_introduced_version() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        assert_eq!(resolver.resolve(&stub_controller()).unwrap(), Resolution::Deferred);
    }

    #[test]
    fn test_defers_controller_introduced_in_future() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller().with_introduced_in(4);
        assert!(resolver.resolve(&controller).unwrap().is_deferred());
    }

    #[test]
    fn test_defers_controller_removed_before_start() {
        let resolver = LifecycleResolver::new(3, 3).unwrap();
        let controller = stub_controller().with_introduced_in(1).with_removed_as_of(2);
        assert!(resolver.resolve(&controller).unwrap().is_deferred());

        let resolver = LifecycleResolver::new(2, 3).unwrap();
        assert!(resolver.resolve(&controller).unwrap().is_deferred());
    }

    #[test]
    fn test_deferral_skips_action_validation() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller()
            .with_introduced_in(5)
            .with_action(stub_action().with_introduced_in(1));
        assert!(resolver.resolve(&controller).unwrap().is_deferred());
    }

    #[test]
    fn test_controller_introduced() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let resolution = resolved(&resolver, &stub_controller().with_introduced_in(1));

        assert_eq!(resolution.versions.supported, vec![v(3)]);
        assert_eq!(resolution.versions.deprecated, vec![v(1), v(2)]);
        assert!(resolution.actions.is_empty());
    }

    #[test]
    fn test_controller_removed() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller().with_introduced_in(1).with_removed_as_of(2);
        let resolution = resolved(&resolver, &controller);

        assert!(resolution.versions.supported.is_empty());
        assert_eq!(resolution.versions.deprecated, vec![v(1)]);
    }

    #[test]
    fn test_controller_declared_twice() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();

        let controller = stub_controller().with_introduced_in(1).with_introduced_in(2);
        assert!(matches!(
            resolver.resolve(&controller),
            Err(LifecycleError::MultipleDeclarations { attribute: "IntroducedIn", .. })
        ));

        let controller = stub_controller()
            .with_introduced_in(1)
            .with_removed_as_of(2)
            .with_removed_as_of(3);
        assert!(matches!(
            resolver.resolve(&controller),
            Err(LifecycleError::MultipleDeclarations { attribute: "RemovedAsOf", .. })
        ));
    }

    #[test]
    fn test_invalid_controller_lifecycle() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();

        let same = stub_controller().with_introduced_in(1).with_removed_as_of(1);
        assert!(resolver.resolve(&same).unwrap_err().is_invalid_lifecycle());

        let inverted = stub_controller().with_introduced_in(2).with_removed_as_of(1);
        assert!(resolver.resolve(&inverted).unwrap_err().is_invalid_lifecycle());
    }

    #[test]
    fn test_invalid_controller_is_rejected_before_deferral() {
        let resolver = LifecycleResolver::new(5, 6).unwrap();
        let controller = stub_controller().with_introduced_in(2).with_removed_as_of(1);
        assert!(resolver.resolve(&controller).unwrap_err().is_invalid_lifecycle());
    }

    #[test]
    fn test_action_inherits_controller() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller().with_introduced_in(1).with_action(stub_action());
        let resolution = resolved(&resolver, &controller);

        let action = resolution.action("get").unwrap();
        assert_eq!(action.lifecycle, FeatureLifecycle::introduced(1));
        assert_eq!(action.versions, resolution.versions);
    }

    #[test]
    fn test_action_introduced_after_controller() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller()
            .with_introduced_in(1)
            .with_action(stub_action().with_introduced_in(2));
        let resolution = resolved(&resolver, &controller);

        let action = resolution.action("get").unwrap();
        assert_eq!(action.versions.supported, vec![v(3)]);
        assert_eq!(action.versions.deprecated, vec![v(2)]);
        assert_eq!(resolution.versions.deprecated, vec![v(1), v(2)]);
    }

    #[test]
    fn test_action_removed() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();

        for (removed, supported, deprecated) in [
            (2, vec![], vec![v(1)]),
            (3, vec![], vec![v(1), v(2)]),
            (4, vec![v(3)], vec![v(1), v(2), v(3)]),
        ] {
            let controller = stub_controller()
                .with_introduced_in(1)
                .with_action(stub_action().with_removed_as_of(removed));
            let resolution = resolved(&resolver, &controller);
            let action = resolution.action("get").unwrap();

            assert_eq!(action.versions.supported, supported, "removed as of {}", removed);
            assert_eq!(action.versions.deprecated, deprecated, "removed as of {}", removed);
        }
    }

    #[test]
    fn test_action_removal_overrides_controller_removal() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller()
            .with_introduced_in(1)
            .with_removed_as_of(2)
            .with_action(stub_action().with_removed_as_of(4));
        let resolution = resolved(&resolver, &controller);

        assert!(resolution.versions.supported.is_empty());
        let action = resolution.action("get").unwrap();
        assert_eq!(action.lifecycle, FeatureLifecycle::introduced(1).removed(4));
        assert_eq!(action.versions.supported, vec![v(3)]);
    }

    #[test]
    fn test_invalid_action_lifecycles() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();

        let cases = [
            // removed before the controller was introduced
            (2, stub_action().with_removed_as_of(1)),
            // removed in the version the controller was introduced
            (1, stub_action().with_removed_as_of(1)),
            // removed in the version the action was introduced
            (1, stub_action().with_introduced_in(2).with_removed_as_of(2)),
            // removed before the action was introduced
            (1, stub_action().with_removed_as_of(2).with_introduced_in(3)),
            // introduced before the controller
            (2, stub_action().with_introduced_in(1)),
        ];

        for (controller_introduced, action) in cases {
            let controller = stub_controller()
                .with_introduced_in(controller_introduced)
                .with_action(action.clone());
            let err = resolver.resolve(&controller).unwrap_err();
            assert!(err.is_invalid_lifecycle(), "{:?} -> {:?}", action, err);
        }
    }

    #[test]
    fn test_action_introduced_before_controller_message() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller()
            .with_introduced_in(2)
            .with_action(stub_action().with_introduced_in(1));

        assert_eq!(
            resolver.resolve(&controller).unwrap_err().to_string(),
            "Invalid lifecycle: Action (get) version cannot be introduced before controller (stub) version."
        );
    }

    #[test]
    fn test_one_invalid_action_aborts_controller() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller()
            .with_introduced_in(1)
            .with_action(ActionModel::new("list"))
            .with_action(ActionModel::new("get").with_introduced_in(1).with_introduced_in(2));

        assert!(matches!(
            resolver.resolve(&controller),
            Err(LifecycleError::MultipleDeclarations { .. })
        ));
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        let resolver = LifecycleResolver::new(1, 3).unwrap();
        let controller = stub_controller().with_introduced_in(1).with_action(stub_action());

        let (resolver, controller) = (&resolver, &controller);

        let results: Vec<Resolution> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || resolver.resolve(controller).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    struct FixedAccessor {
        controller: FeatureLifecycle,
    }

    impl MetadataAccessor<ControllerModel> for FixedAccessor {
        fn introduced_in(&self, _entity: &ControllerModel) -> Result<Option<ApiVersion>> {
            Ok(self.controller.introduced_in)
        }

        fn removed_as_of(&self, _entity: &ControllerModel) -> Result<Option<ApiVersion>> {
            Ok(self.controller.removed_as_of)
        }
    }

    impl MetadataAccessor<ActionModel> for FixedAccessor {
        fn introduced_in(&self, _entity: &ActionModel) -> Result<Option<ApiVersion>> {
            Ok(None)
        }

        fn removed_as_of(&self, _entity: &ActionModel) -> Result<Option<ApiVersion>> {
            Ok(None)
        }
    }

    #[test]
    fn test_custom_accessor() {
        let accessor = FixedAccessor {
            controller: FeatureLifecycle::introduced(2),
        };
        let resolver = LifecycleResolver::with_accessor(VersionRange::new(1, 3).unwrap(), accessor);

        // attributes on the model are ignored, only the accessor is consulted
        let controller = ControllerModel::new("stub").with_introduced_in(1).with_action(stub_action());
        let resolution = resolver.resolve(&controller).unwrap();
        let resolution = resolution.resolved().unwrap();

        assert_eq!(resolution.versions.deprecated, vec![v(2)]);
        assert_eq!(resolution.actions[0].versions.deprecated, vec![v(2)]);
    }
}
