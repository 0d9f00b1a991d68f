//! JSON report of the versions assigned to each endpoint

use serde::Serialize;
use verlife::prelude::*;

#[derive(Debug, Serialize)]
pub struct Report {
    pub versions: Vec<ApiVersion>,
    pub controllers: Vec<EndpointReport>,
}

#[derive(Debug, Serialize)]
pub struct EndpointReport {
    pub name: String,
    #[serde(flatten)]
    pub versions: Option<ApiVersionModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<EndpointReport>,
}

impl Report {
    pub fn new(versions: &[ApiVersion], controllers: &[ControllerModel]) -> Self {
        Self {
            versions: versions.to_vec(),
            controllers: controllers
                .iter()
                .map(|controller| EndpointReport {
                    name: controller.name.clone(),
                    versions: controller.versions.clone(),
                    actions: controller
                        .actions
                        .iter()
                        .map(|action| EndpointReport {
                            name: action.name.clone(),
                            versions: action.versions.clone(),
                            actions: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
