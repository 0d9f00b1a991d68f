//! Introduced/removed facts of a controller or action

use crate::error::{LifecycleError, Result};
use crate::metadata::MetadataAccessor;
use crate::version::ApiVersion;
use serde::Serialize;

/// When a controller or action appeared and, optionally, when it went away
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureLifecycle {
    /// First version the entity is reachable in
    pub introduced_in: Option<ApiVersion>,
    /// First version the entity is no longer reachable in
    pub removed_as_of: Option<ApiVersion>,
}

impl FeatureLifecycle {
    pub fn new(introduced_in: Option<ApiVersion>, removed_as_of: Option<ApiVersion>) -> Self {
        Self {
            introduced_in,
            removed_as_of,
        }
    }

    /// A lifecycle introduced in `major` and never removed
    pub fn introduced(major: u32) -> Self {
        Self::new(Some(ApiVersion::major(major)), None)
    }

    /// Set the removal version
    pub fn removed(mut self, major: u32) -> Self {
        self.removed_as_of = Some(ApiVersion::major(major));
        self
    }

    /// Read the lifecycle declared directly on `entity`.
    ///
    /// # Errors
    ///
    /// Propagates [`LifecycleError::MultipleDeclarations`] from the accessor.
    pub fn extract<E: ?Sized, A: MetadataAccessor<E> + ?Sized>(
        accessor: &A,
        entity: &E,
    ) -> Result<Self> {
        Ok(Self {
            introduced_in: accessor.introduced_in(entity)?,
            removed_as_of: accessor.removed_as_of(entity)?,
        })
    }

    /// True when neither fact is declared.
    pub fn is_empty(&self) -> bool {
        self.introduced_in.is_none() && self.removed_as_of.is_none()
    }

    /// Fill every absent fact from `parent`; declared facts always win.
    pub fn inherit_from(&self, parent: &FeatureLifecycle) -> FeatureLifecycle {
        FeatureLifecycle {
            introduced_in: self.introduced_in.or(parent.introduced_in),
            removed_as_of: self.removed_as_of.or(parent.removed_as_of),
        }
    }

    /// Check that the entity is removed strictly after it is introduced.
    ///
    /// A lifecycle missing either fact is always valid.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidLifecycle`] naming `entity`.
    pub fn validate(&self, entity: &str) -> Result<()> {
        let (Some(introduced_in), Some(removed_as_of)) = (self.introduced_in, self.removed_as_of)
        else {
            return Ok(());
        };

        if introduced_in == removed_as_of {
            return Err(LifecycleError::invalid_lifecycle(format!(
                "({}) ApiVersion cannot be introduced and removed in the same version.",
                entity
            )));
        }

        if removed_as_of < introduced_in {
            return Err(LifecycleError::invalid_lifecycle(format!(
                "({}) ApiVersion cannot be removed before it is introduced.",
                entity
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(FeatureLifecycle::default().validate("c").is_ok());
        assert!(FeatureLifecycle::introduced(1).validate("c").is_ok());
        assert!(FeatureLifecycle::introduced(1).removed(2).validate("c").is_ok());
        assert!(FeatureLifecycle::new(None, Some(ApiVersion::major(1)))
            .validate("c")
            .is_ok());

        let err = FeatureLifecycle::introduced(1).removed(1).validate("values").unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidLifecycle(
                "(values) ApiVersion cannot be introduced and removed in the same version."
                    .to_string()
            )
        );

        let err = FeatureLifecycle::introduced(2).removed(1).validate("values").unwrap_err();
        assert!(err.to_string().contains("removed before it is introduced"));
    }

    #[test]
    fn test_inherit_field_by_field() {
        let controller = FeatureLifecycle::introduced(1).removed(3);

        let bare = FeatureLifecycle::default().inherit_from(&controller);
        assert_eq!(bare, controller);

        let later = FeatureLifecycle::introduced(2).inherit_from(&controller);
        assert_eq!(later, FeatureLifecycle::introduced(2).removed(3));

        let outlives = FeatureLifecycle::new(None, Some(ApiVersion::major(5))).inherit_from(&controller);
        assert_eq!(outlives, FeatureLifecycle::introduced(1).removed(5));
    }

    #[test]
    fn test_is_empty() {
        assert!(FeatureLifecycle::default().is_empty());
        assert!(!FeatureLifecycle::introduced(0).is_empty());
    }
}
