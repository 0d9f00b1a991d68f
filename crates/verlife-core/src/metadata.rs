//! Access to lifecycle facts declared on controllers and actions
//!
//! The resolver never inspects how facts are stored. It asks a
//! [`MetadataAccessor`], which is implemented once per host metadata
//! representation. [`AttributeAccessor`] covers anything exposing a list of
//! [`LifecycleAttribute`]s, including [`ControllerModel`] and [`ActionModel`].

use crate::attribute::LifecycleAttribute;
use crate::error::{LifecycleError, Result};
use crate::model::{ActionModel, ControllerModel};
use crate::version::ApiVersion;

/// Reads the introduced/removed facts declared on an entity
pub trait MetadataAccessor<E: ?Sized> {
    /// The single introduced version declared on `entity`, if any
    fn introduced_in(&self, entity: &E) -> Result<Option<ApiVersion>>;

    /// The single removal version declared on `entity`, if any
    fn removed_as_of(&self, entity: &E) -> Result<Option<ApiVersion>>;
}

/// An entity carrying lifecycle attributes
pub trait HasAttributes {
    /// Name used in error messages
    fn name(&self) -> &str;

    fn attributes(&self) -> &[LifecycleAttribute];
}

impl HasAttributes for ControllerModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[LifecycleAttribute] {
        &self.attributes
    }
}

impl HasAttributes for ActionModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[LifecycleAttribute] {
        &self.attributes
    }
}

/// Accessor over declared [`LifecycleAttribute`] lists
///
/// At most one attribute of each kind may be declared per entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeAccessor;

impl AttributeAccessor {
    fn single<E: HasAttributes + ?Sized>(
        entity: &E,
        matches: fn(&LifecycleAttribute) -> bool,
    ) -> Result<Option<ApiVersion>> {
        let mut declared = entity.attributes().iter().filter(|a| matches(a));
        let first = declared.next();

        if let Some(duplicate) = declared.next() {
            let attribute = duplicate.name();
            trace_warn!(entity = entity.name(), attribute, "lifecycle attribute declared more than once");
            return Err(LifecycleError::MultipleDeclarations {
                entity: entity.name().to_string(),
                attribute,
            });
        }

        Ok(first.map(LifecycleAttribute::version))
    }
}

impl<E: HasAttributes + ?Sized> MetadataAccessor<E> for AttributeAccessor {
    fn introduced_in(&self, entity: &E) -> Result<Option<ApiVersion>> {
        Self::single(entity, |a| matches!(a, LifecycleAttribute::IntroducedIn(_)))
    }

    fn removed_as_of(&self, entity: &E) -> Result<Option<ApiVersion>> {
        Self::single(entity, |a| matches!(a, LifecycleAttribute::RemovedAsOf(_)))
    }
}
