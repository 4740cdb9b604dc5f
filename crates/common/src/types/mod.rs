use std::collections::BTreeMap;

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Debug, Clone)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Static identity of a running service, shared by the probe and metadata routes.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDescriptor {
    /// Machine name, e.g. `listing-service`; also used as the metrics label.
    pub name: &'static str,
    /// Human readable name shown on `GET /`.
    pub title: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [(&'static str, &'static str)],
}

impl ServiceDescriptor {
    pub fn health(&self) -> Health {
        Health { status: "healthy", service: self.name, version: self.version }
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            service: self.title,
            version: self.version,
            endpoints: self.endpoints.iter().copied().collect(),
        }
    }
}
