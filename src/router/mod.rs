use std::{collections::HashMap, str::FromStr};

use http::Method;

use crate::InsertError;

pub use dispatcher::{Dispatcher, Match};
pub use params::Params;
pub use registry::{DynamicRoute, MethodRoutes, Registry, StaticRoute};
pub use shared::SharedRegistry;

mod dispatcher;
mod params;
mod registry;
mod shared;

/// Parameter name to the regex source that replaces its default capture.
pub type Constraints = HashMap<String, String>;

/// The methods a route is registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Methods {
    /// Matches any request method, checked after the exact-method routes.
    Any,
    Only(Vec<Method>),
}

impl Methods {
    /// The method token that stands for [`Methods::Any`].
    pub const WILDCARD: &'static str = "*";
}

impl From<Method> for Methods {
    fn from(method: Method) -> Self {
        Self::Only(vec![method])
    }
}

impl From<Vec<Method>> for Methods {
    fn from(methods: Vec<Method>) -> Self {
        Self::Only(methods)
    }
}

impl From<&[Method]> for Methods {
    fn from(methods: &[Method]) -> Self {
        Self::Only(methods.to_vec())
    }
}

impl<const N: usize> From<[Method; N]> for Methods {
    fn from(methods: [Method; N]) -> Self {
        Self::Only(methods.into())
    }
}

impl FromStr for Methods {
    type Err = InsertError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        if method == Self::WILDCARD {
            return Ok(Self::Any);
        }
        Method::from_str(method)
            .map(Self::from)
            .map_err(|_| InsertError::invalid_method(method))
    }
}

impl TryFrom<&str> for Methods {
    type Error = InsertError;

    fn try_from(method: &str) -> Result<Self, Self::Error> {
        method.parse()
    }
}

impl TryFrom<&String> for Methods {
    type Error = InsertError;

    fn try_from(method: &String) -> Result<Self, Self::Error> {
        method.parse()
    }
}

impl TryFrom<&[&str]> for Methods {
    type Error = InsertError;

    fn try_from(methods: &[&str]) -> Result<Self, Self::Error> {
        let mut only = Vec::with_capacity(methods.len());
        for method in methods {
            match method.parse()? {
                Self::Any => return Ok(Self::Any),
                Self::Only(parsed) => only.extend(parsed),
            }
        }
        Ok(Self::Only(only))
    }
}

impl TryFrom<Vec<&str>> for Methods {
    type Error = InsertError;

    fn try_from(methods: Vec<&str>) -> Result<Self, Self::Error> {
        Self::try_from(methods.as_slice())
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Methods {
    type Error = InsertError;

    fn try_from(methods: [&str; N]) -> Result<Self, Self::Error> {
        Self::try_from(methods.as_slice())
    }
}
