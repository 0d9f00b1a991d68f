//! Host-side API version conventions
//!
//! A [`ConventionBuilder`] collects the versions each controller and action
//! should be advertised under and writes them into the application model.
//! [`ApiVersionConventionBuilder`] is the in-memory implementation; it also
//! provides the default convention used for controllers nobody configured.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use verlife_core::{ApiVersion, ApiVersionModel, ControllerModel, Result};

/// The convention seam between lifecycle resolution and the host model
pub trait ConventionBuilder {
    /// Convention for the named controller, created on first use
    fn controller(&mut self, controller: &str) -> &mut ControllerVersionConvention;

    /// Apply the conventions to a controller and its actions.
    ///
    /// Returns whether a convention handled the controller.
    fn apply_to(&mut self, controller: &mut ControllerModel) -> Result<bool>;
}

fn push_unique(versions: &mut Vec<ApiVersion>, version: ApiVersion) {
    if !versions.contains(&version) {
        versions.push(version);
    }
}

fn sorted(versions: &[ApiVersion]) -> Vec<ApiVersion> {
    let mut versions = versions.to_vec();
    versions.sort();
    versions
}

/// Versions configured for a single action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionVersionConvention {
    supported: Vec<ApiVersion>,
    deprecated: Vec<ApiVersion>,
}

impl ActionVersionConvention {
    pub fn has_api_version(&mut self, version: ApiVersion) -> &mut Self {
        push_unique(&mut self.supported, version);
        self
    }

    pub fn has_api_versions<I: IntoIterator<Item = ApiVersion>>(&mut self, versions: I) -> &mut Self {
        versions.into_iter().for_each(|v| push_unique(&mut self.supported, v));
        self
    }

    pub fn has_deprecated_api_version(&mut self, version: ApiVersion) -> &mut Self {
        push_unique(&mut self.deprecated, version);
        self
    }

    pub fn has_deprecated_api_versions<I: IntoIterator<Item = ApiVersion>>(
        &mut self,
        versions: I,
    ) -> &mut Self {
        versions.into_iter().for_each(|v| push_unique(&mut self.deprecated, v));
        self
    }

    pub fn supported(&self) -> &[ApiVersion] {
        &self.supported
    }

    pub fn deprecated(&self) -> &[ApiVersion] {
        &self.deprecated
    }

    /// The version model this convention produces
    pub fn version_model(&self) -> ApiVersionModel {
        ApiVersionModel::new(sorted(&self.supported), sorted(&self.deprecated))
    }
}

/// Versions configured for a controller and, optionally, its actions
///
/// Actions without a convention of their own take the controller's versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControllerVersionConvention {
    supported: Vec<ApiVersion>,
    deprecated: Vec<ApiVersion>,
    actions: BTreeMap<String, ActionVersionConvention>,
}

impl ControllerVersionConvention {
    pub fn has_api_version(&mut self, version: ApiVersion) -> &mut Self {
        push_unique(&mut self.supported, version);
        self
    }

    pub fn has_api_versions<I: IntoIterator<Item = ApiVersion>>(&mut self, versions: I) -> &mut Self {
        versions.into_iter().for_each(|v| push_unique(&mut self.supported, v));
        self
    }

    pub fn has_deprecated_api_version(&mut self, version: ApiVersion) -> &mut Self {
        push_unique(&mut self.deprecated, version);
        self
    }

    pub fn has_deprecated_api_versions<I: IntoIterator<Item = ApiVersion>>(
        &mut self,
        versions: I,
    ) -> &mut Self {
        versions.into_iter().for_each(|v| push_unique(&mut self.deprecated, v));
        self
    }

    /// Convention for the named action, created on first use
    pub fn action(&mut self, action: &str) -> &mut ActionVersionConvention {
        self.actions.entry(action.to_string()).or_default()
    }

    pub fn supported(&self) -> &[ApiVersion] {
        &self.supported
    }

    pub fn deprecated(&self) -> &[ApiVersion] {
        &self.deprecated
    }

    /// Action conventions keyed by action name
    pub fn actions(&self) -> &BTreeMap<String, ActionVersionConvention> {
        &self.actions
    }

    /// The version model this convention produces for the controller itself
    pub fn version_model(&self) -> ApiVersionModel {
        ApiVersionModel::new(sorted(&self.supported), sorted(&self.deprecated))
    }

    /// Write the configured versions into the controller and its actions
    pub fn apply_to(&self, controller: &mut ControllerModel) {
        let model = self.version_model();

        for action in &mut controller.actions {
            action.versions = Some(match self.actions.get(&action.name) {
                Some(convention) => convention.version_model(),
                None => model.clone(),
            });
        }

        controller.versions = Some(model);
    }
}

/// In-memory [`ConventionBuilder`] with a default convention
///
/// Controllers that have a registered convention get exactly the versions
/// configured for them. Any other controller is assigned the default version
/// when `assume_default_version` is enabled (the default), and left
/// untouched otherwise.
#[derive(Debug, Clone)]
pub struct ApiVersionConventionBuilder {
    controllers: HashMap<String, ControllerVersionConvention>,
    default_version: ApiVersion,
    assume_default_version: bool,
}

impl ApiVersionConventionBuilder {
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
            default_version: ApiVersion::major(1),
            assume_default_version: true,
        }
    }

    /// Set the version assigned to unconfigured controllers
    pub fn default_version(mut self, version: ApiVersion) -> Self {
        self.default_version = version;
        self
    }

    /// Enable or disable the default convention
    pub fn assume_default_version(mut self, enabled: bool) -> Self {
        self.assume_default_version = enabled;
        self
    }

    /// The registered convention for a controller, if any
    pub fn convention(&self, controller: &str) -> Option<&ControllerVersionConvention> {
        self.controllers.get(controller)
    }

    /// Number of controllers with a registered convention
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    fn apply_default(&self, controller: &mut ControllerModel) {
        let model = ApiVersionModel::new(vec![self.default_version], Vec::new());
        for action in &mut controller.actions {
            action.versions = Some(model.clone());
        }
        controller.versions = Some(model);
    }
}

impl Default for ApiVersionConventionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConventionBuilder for ApiVersionConventionBuilder {
    fn controller(&mut self, controller: &str) -> &mut ControllerVersionConvention {
        self.controllers.entry(controller.to_string()).or_default()
    }

    fn apply_to(&mut self, controller: &mut ControllerModel) -> Result<bool> {
        if let Some(convention) = self.controllers.get(&controller.name) {
            convention.apply_to(controller);
            return Ok(true);
        }

        if self.assume_default_version {
            trace_debug!(
                controller = %controller.name,
                version = %self.default_version,
                "applying default version convention"
            );
            self.apply_default(controller);
            return Ok(true);
        }

        Ok(false)
    }
}
