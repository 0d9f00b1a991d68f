//! Application model of controllers and actions
//!
//! This is the host-side view the resolver reads attributes from and the
//! convention layer writes version models into.

use crate::attribute::LifecycleAttribute;
use crate::version::ApiVersion;
use serde::Serialize;

/// Versions a controller or action has been assigned by a convention
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersionModel {
    /// Versions the endpoint is advertised as supported in
    pub supported: Vec<ApiVersion>,
    /// Versions the endpoint is advertised as deprecated in
    pub deprecated: Vec<ApiVersion>,
}

impl ApiVersionModel {
    pub fn new(supported: Vec<ApiVersion>, deprecated: Vec<ApiVersion>) -> Self {
        Self {
            supported,
            deprecated,
        }
    }

    /// Every version the endpoint is reachable under, ascending
    pub fn implemented(&self) -> Vec<ApiVersion> {
        let mut versions: Vec<ApiVersion> = self
            .supported
            .iter()
            .chain(self.deprecated.iter())
            .copied()
            .collect();
        versions.sort();
        versions.dedup();
        versions
    }

    pub fn is_supported(&self, version: &ApiVersion) -> bool {
        self.supported.contains(version)
    }

    pub fn is_deprecated(&self, version: &ApiVersion) -> bool {
        self.deprecated.contains(version)
    }

    /// True when the endpoint is not reachable under any version
    pub fn is_empty(&self) -> bool {
        self.supported.is_empty() && self.deprecated.is_empty()
    }
}

/// An action (handler method) of a controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionModel {
    /// Action name, unique within its controller
    pub name: String,
    /// Lifecycle attributes declared on the action
    pub attributes: Vec<LifecycleAttribute>,
    /// Versions assigned by a convention, if any
    pub versions: Option<ApiVersionModel>,
}

impl ActionModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            versions: None,
        }
    }

    pub fn with_introduced_in(mut self, major: u32) -> Self {
        self.attributes.push(LifecycleAttribute::introduced_in(major));
        self
    }

    pub fn with_removed_as_of(mut self, major: u32) -> Self {
        self.attributes.push(LifecycleAttribute::removed_as_of(major));
        self
    }

    pub fn with_attribute(mut self, attribute: LifecycleAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A controller: a group of actions sharing a route prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerModel {
    /// Controller name, unique within the application
    pub name: String,
    /// Lifecycle attributes declared on the controller
    pub attributes: Vec<LifecycleAttribute>,
    /// Actions in declaration order
    pub actions: Vec<ActionModel>,
    /// Versions assigned by a convention, if any
    pub versions: Option<ApiVersionModel>,
}

impl ControllerModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            actions: Vec::new(),
            versions: None,
        }
    }

    pub fn with_introduced_in(mut self, major: u32) -> Self {
        self.attributes.push(LifecycleAttribute::introduced_in(major));
        self
    }

    pub fn with_removed_as_of(mut self, major: u32) -> Self {
        self.attributes.push(LifecycleAttribute::removed_as_of(major));
        self
    }

    pub fn with_attribute(mut self, attribute: LifecycleAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_action(mut self, action: ActionModel) -> Self {
        self.actions.push(action);
        self
    }

    /// Look up an action by name
    pub fn action(&self, name: &str) -> Option<&ActionModel> {
        self.actions.iter().find(|a| a.name == name)
    }
}
