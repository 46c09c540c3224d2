//! Route tables declared in JSON.
//!
//! ```json
//! {
//!   "routes": [
//!     { "methods": "GET", "path": "/", "handler": "home" },
//!     { "methods": ["GET", "HEAD"], "path": "/users/:id", "handler": "user",
//!       "constraints": { "id": "\\d+" } },
//!     { "methods": "*", "path": "/assets/*file", "handler": "assets" }
//!   ]
//! }
//! ```

use std::{fs::File, io::BufReader, io::Read, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::{Constraints, InsertError, Methods, Registry};

#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub methods: MethodsConfig,
    pub path: String,
    pub handler: String,
    #[serde(default)]
    pub constraints: Constraints,
}

/// Either a single method token or a list of them; `"*"` is any method.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MethodsConfig {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<&MethodsConfig> for Methods {
    type Error = InsertError;

    fn try_from(config: &MethodsConfig) -> Result<Self, Self::Error> {
        match config {
            MethodsConfig::One(method) => method.parse(),
            MethodsConfig::Many(methods) => {
                Methods::try_from(methods.iter().map(String::as_str).collect::<Vec<_>>())
            }
        }
    }
}

impl RoutesConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid route table")
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Invalid route table")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open route table {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to load route table {}", path.display()))
    }

    /// Registers every route in declaration order, handlers being their names.
    pub fn into_registry(self) -> Result<Registry<String>> {
        let mut registry = Registry::new();
        for route in self.routes {
            registry
                .add_route_with(
                    &route.methods,
                    &route.path,
                    route.handler,
                    &route.constraints,
                )
                .with_context(|| format!("Failed to register route '{}'", route.path))?;
        }
        debug!("Loaded route table with {} entries", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use http::Method;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_accept_single_and_listed_methods() {
        let config = RoutesConfig::from_json(
            r#"{"routes": [
                {"methods": "GET", "path": "/", "handler": "home"},
                {"methods": ["PUT", "PATCH"], "path": "/users/:id", "handler": "user"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            Methods::try_from(&config.routes[1].methods).unwrap(),
            Methods::from([Method::PUT, Method::PATCH])
        );
        assert!(config.routes[0].constraints.is_empty());
    }

    #[test]
    fn should_name_route_that_failed() {
        let error = RoutesConfig::from_json(
            r#"{"routes": [{"methods": "GET", "path": "/:id/:id", "handler": "x"}]}"#,
        )
        .unwrap()
        .into_registry()
        .unwrap_err();
        assert_eq!(error.to_string(), "Failed to register route '/:id/:id'");
        assert_eq!(
            error.downcast_ref::<InsertError>(),
            Some(&InsertError::DuplicateArgumentName {
                name: "id".to_string()
            })
        );
    }
}
