use std::{collections::HashMap, fmt::Display, sync::Arc};

use http::Method;
use regex::Regex;
use tracing::{debug, warn};

use crate::{
    template::{self, Segment, Template},
    InsertError,
};

use super::{Constraints, Dispatcher, Methods};

/// Drops one trailing separator, turning `/users/` and `/users` into the same key.
pub(crate) fn trim_separator(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

#[derive(Debug)]
pub struct StaticRoute<T> {
    handler: Arc<T>,
    arguments: Arc<[String]>,
}

impl<T> StaticRoute<T> {
    pub fn handler(&self) -> &T {
        &self.handler
    }

    /// Argument names declared by the route, none of which this entry captures.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl<T> Clone for StaticRoute<T> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            arguments: self.arguments.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Argument {
    pub(crate) name: String,
    /// Capture group holding the value, `None` when this template omits it.
    pub(crate) group: Option<String>,
}

#[derive(Debug)]
pub struct DynamicRoute<T> {
    regex: Regex,
    arguments: Arc<[Argument]>,
    handler: Arc<T>,
}

impl<T> DynamicRoute<T> {
    /// Source of the anchored matcher.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn handler(&self) -> &T {
        &self.handler
    }

    /// Declared argument names, each paired with whether this entry captures it.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, bool)> {
        self.arguments
            .iter()
            .map(|argument| (argument.name.as_str(), argument.group.is_some()))
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn argument_groups(&self) -> &[Argument] {
        &self.arguments
    }
}

impl<T> Clone for DynamicRoute<T> {
    fn clone(&self) -> Self {
        Self {
            regex: self.regex.clone(),
            arguments: self.arguments.clone(),
            handler: self.handler.clone(),
        }
    }
}

/// Routes registered under a single method, or under the wildcard.
#[derive(Debug)]
pub struct MethodRoutes<T> {
    static_routes: HashMap<String, StaticRoute<T>>,
    dynamic_routes: Vec<DynamicRoute<T>>,
}

impl<T> Default for MethodRoutes<T> {
    fn default() -> Self {
        Self {
            static_routes: HashMap::new(),
            dynamic_routes: Vec::new(),
        }
    }
}

impl<T> Clone for MethodRoutes<T> {
    fn clone(&self) -> Self {
        Self {
            static_routes: self.static_routes.clone(),
            dynamic_routes: self.dynamic_routes.clone(),
        }
    }
}

impl<T> MethodRoutes<T> {
    /// Exact lookup, insensitive to one trailing separator.
    pub fn static_route(&self, path: &str) -> Option<&StaticRoute<T>> {
        self.static_routes.get(trim_separator(path))
    }

    pub fn static_routes(&self) -> impl Iterator<Item = (&str, &StaticRoute<T>)> {
        self.static_routes
            .iter()
            .map(|(path, route)| (path.as_str(), route))
    }

    /// Dynamic routes in registration order.
    pub fn dynamic_routes(&self) -> &[DynamicRoute<T>] {
        &self.dynamic_routes
    }

    pub fn len(&self) -> usize {
        self.static_routes.len() + self.dynamic_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(
        &mut self,
        method: &dyn Display,
        compiled: &[Compiled],
        arguments: &Arc<[String]>,
        handler: &Arc<T>,
    ) {
        for entry in compiled {
            match entry {
                Compiled::Static(path) => {
                    let route = StaticRoute {
                        handler: handler.clone(),
                        arguments: arguments.clone(),
                    };
                    if self.static_routes.insert(path.clone(), route).is_some() {
                        debug!("Replaced static route {} {:?}", method, path);
                    } else {
                        debug!("Registered static route {} {:?}", method, path);
                    }
                }
                Compiled::Dynamic(regex, groups) => {
                    debug!("Registered dynamic route {} {}", method, regex);
                    self.dynamic_routes.push(DynamicRoute {
                        regex: regex.clone(),
                        arguments: groups.clone(),
                        handler: handler.clone(),
                    });
                }
            }
        }
    }
}

/// A compiled template, ready to be stored under any number of methods.
enum Compiled {
    Static(String),
    Dynamic(Regex, Arc<[Argument]>),
}

/// Route table built once and queried by [`Dispatcher`]s.
///
/// Static templates live in per-method hash maps; dynamic templates are kept
/// in registration order and the first one matching a path wins.
#[derive(Debug)]
pub struct Registry<T> {
    routes: HashMap<Method, MethodRoutes<T>>,
    any: MethodRoutes<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            any: MethodRoutes::default(),
        }
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            any: self.any.clone(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every method in `methods` and every template
    /// compiled from `route`.
    pub fn add_route<M>(&mut self, methods: M, route: &str, handler: T) -> Result<(), InsertError>
    where
        M: TryInto<Methods>,
        M::Error: Into<InsertError>,
    {
        self.add_route_with(methods, route, handler, &Constraints::new())
    }

    /// Like [`Registry::add_route`], with capture patterns overridden per argument.
    ///
    /// Nothing is registered unless every compiled template is valid.
    pub fn add_route_with<M>(
        &mut self,
        methods: M,
        route: &str,
        handler: T,
        constraints: &Constraints,
    ) -> Result<(), InsertError>
    where
        M: TryInto<Methods>,
        M::Error: Into<InsertError>,
    {
        let methods = methods.try_into().map_err(Into::<InsertError>::into)?;
        if matches!(&methods, Methods::Only(methods) if methods.is_empty()) {
            return Err(InsertError::EmptyMethods {
                route: route.to_string(),
            });
        }
        let templates = template::compile(route)?;
        let arguments = argument_names(&templates);
        for name in constraints.keys() {
            if !arguments.contains(name) {
                warn!(
                    "Ignoring constraint for unknown argument '{}' on route '{}'",
                    name, route
                );
            }
        }
        let compiled = templates
            .iter()
            .map(|template| compile_template(template, &arguments, constraints))
            .collect::<Result<Vec<_>, _>>()?;
        let arguments: Arc<[String]> = arguments.into();
        let handler = Arc::new(handler);
        match methods {
            Methods::Any => self
                .any
                .insert(&Methods::WILDCARD, &compiled, &arguments, &handler),
            Methods::Only(methods) => {
                for method in methods {
                    let routes = self.routes.entry(method.clone()).or_default();
                    routes.insert(&method, &compiled, &arguments, &handler);
                }
            }
        }
        Ok(())
    }

    /// Routes registered for exactly `method`.
    pub fn routes(&self, method: &Method) -> Option<&MethodRoutes<T>> {
        self.routes.get(method)
    }

    /// Routes registered under the wildcard method.
    pub fn any_routes(&self) -> &MethodRoutes<T> {
        &self.any
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.routes.keys()
    }

    /// Number of stored entries across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(MethodRoutes::len).sum::<usize>() + self.any.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatcher(&self) -> Dispatcher<'_, T> {
        Dispatcher::new(self)
    }
}

/// Every argument name across all templates of one route, first occurrence first.
fn argument_names(templates: &[Template]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in templates.iter().flat_map(Template::param_names) {
        if !names.iter().any(|known| known == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn compile_template(
    template: &Template,
    arguments: &[String],
    constraints: &Constraints,
) -> Result<Compiled, InsertError> {
    if let Some(literal) = template.literal() {
        return Ok(Compiled::Static(trim_separator(literal).to_string()));
    }

    let segments = template.segments();
    let mut groups: HashMap<&str, String> = HashMap::new();
    let mut pattern = String::from("^(?:");
    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) if index + 1 == segments.len() => {
                pattern.push_str(&regex::escape(trim_separator(text)))
            }
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Param { name, quantifier } => {
                if groups.contains_key(name.as_str()) {
                    return Err(InsertError::duplicate_argument_name(name));
                }
                let capture = match constraints.get(name) {
                    Some(constraint) => {
                        validate_constraint(name, constraint)?;
                        constraint.as_str()
                    }
                    None => quantifier.pattern(),
                };
                let group = format!("p{}", groups.len());
                pattern.push_str(&format!("(?P<{}>{})", group, capture));
                groups.insert(name.as_str(), group);
            }
        }
    }
    pattern.push_str(")$");

    let regex = Regex::new(&pattern).map_err(|err| InsertError::InvalidPattern {
        pattern: pattern.clone(),
        message: err.to_string(),
    })?;
    let arguments = arguments
        .iter()
        .map(|name| Argument {
            name: name.clone(),
            group: groups.remove(name.as_str()),
        })
        .collect();
    Ok(Compiled::Dynamic(regex, arguments))
}

fn validate_constraint(name: &str, constraint: &str) -> Result<(), InsertError> {
    Regex::new(&format!("^(?:{})$", constraint))
        .map(|_| ())
        .map_err(|err| InsertError::InvalidConstraint {
            name: name.to_string(),
            pattern: constraint.to_string(),
            message: err.to_string(),
        })
}
