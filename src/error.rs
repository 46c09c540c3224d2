use std::{convert::Infallible, fmt::Display};

/// Errors raised while compiling a route template or registering it.
///
/// All of them are configuration errors: the route table being assembled
/// is wrong and the call that produced the error left the registry untouched.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// An optional parameter name contains a hyphen.
    InvalidArgumentName { name: String },
    /// The same parameter name appears twice within one compiled template.
    DuplicateArgumentName { name: String },
    /// A method token is not a valid HTTP method.
    InvalidMethod { method: String },
    /// A route was registered for an empty set of methods.
    EmptyMethods { route: String },
    /// A constraint pattern could not be compiled into the route matcher.
    InvalidConstraint {
        name: String,
        pattern: String,
        message: String,
    },
    /// The matcher assembled for a compiled template was rejected.
    InvalidPattern { pattern: String, message: String },
}

impl InsertError {
    pub(crate) fn invalid_argument_name(name: &str) -> Self {
        Self::InvalidArgumentName {
            name: name.to_string(),
        }
    }

    pub(crate) fn duplicate_argument_name(name: &str) -> Self {
        Self::DuplicateArgumentName {
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid_method(method: &str) -> Self {
        Self::InvalidMethod {
            method: method.to_string(),
        }
    }
}

impl Display for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgumentName { name } => write!(
                f,
                "optional argument name '{}' must not contain hyphens",
                name
            ),
            Self::DuplicateArgumentName { name } => {
                write!(f, "cannot use argument name '{}' twice", name)
            }
            Self::InvalidMethod { method } => write!(f, "invalid HTTP method '{}'", method),
            Self::EmptyMethods { route } => {
                write!(f, "route '{}' must be registered for at least one method", route)
            }
            Self::InvalidConstraint {
                name,
                pattern,
                message,
            } => write!(
                f,
                "constraint '{}' for argument '{}' is not a valid pattern: {}",
                pattern, name, message
            ),
            Self::InvalidPattern { pattern, message } => {
                write!(f, "route pattern '{}' failed to compile: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for InsertError {}

impl From<Infallible> for InsertError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_name_the_offending_argument() {
        assert_eq!(
            InsertError::duplicate_argument_name("id").to_string(),
            "cannot use argument name 'id' twice"
        );
        assert_eq!(
            InsertError::invalid_argument_name("user-id").to_string(),
            "optional argument name 'user-id' must not contain hyphens"
        );
    }
}
