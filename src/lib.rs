//! Route template compiler and method-aware path dispatcher.
//!
//! Routes are registered once into a [`Registry`] and resolved many times by
//! a [`Dispatcher`]. Templates without parameters become exact-match entries;
//! the rest compile into anchored regular expressions tried in registration
//! order, the first match winning.
//!
//! # Template syntax
//!
//! ```text
//!  Syntax     Matches
//!  /literal   the text itself
//!  /:name     one path component
//!  /*name     anything, separators included
//!  /:?name    optional, one path component
//! ```
//!
//! A trailing separator never matters: `/users` and `/users/` are the same
//! route and both request forms match it.
//!
//! # Example usage
//!
//! ```
//! use http::Method;
//! use waypoint::{Constraints, Registry};
//!
//! # fn main() -> Result<(), waypoint::InsertError> {
//! let mut registry = Registry::new();
//! registry.add_route(Method::GET, "/", "home")?;
//! registry.add_route(["GET", "HEAD"], "/page/:?slug", "page")?;
//! registry.add_route_with(
//!     Method::GET,
//!     "/users/:id",
//!     "user",
//!     &Constraints::from([("id".to_string(), r"\d+".to_string())]),
//! )?;
//!
//! let dispatcher = registry.dispatcher();
//!
//! let found = dispatcher.dispatch(&Method::GET, "/users/42").unwrap();
//! assert_eq!(found.handler, &"user");
//! assert_eq!(found.params.get("id"), Some("42"));
//!
//! let found = dispatcher.dispatch(&Method::HEAD, "/page").unwrap();
//! assert_eq!(found.handler, &"page");
//! assert!(found.params.contains("slug"));
//! assert_eq!(found.params.get("slug"), None);
//!
//! assert!(dispatcher.dispatch(&Method::GET, "/users/admin").is_none());
//! # Ok(())
//! # }
//! ```
pub(crate) mod error;
pub(crate) mod router;
pub(crate) mod template;

#[cfg(feature = "config")]
pub mod config;

pub use error::InsertError;
pub use router::{
    Constraints, Dispatcher, DynamicRoute, Match, MethodRoutes, Methods, Params, Registry,
    SharedRegistry, StaticRoute,
};
pub use template::{compile, Quantifier, Segment, Template};
