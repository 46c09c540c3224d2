use http::Method;
use tracing::trace;

use super::{registry::trim_separator, MethodRoutes, Params, Registry};

/// A handler together with the arguments extracted from the path.
#[derive(Debug)]
pub struct Match<'r, 'p, T> {
    pub handler: &'r T,
    pub params: Params<'r, 'p>,
}

/// Resolves request paths against a [`Registry`] it borrows but never changes.
///
/// Routes registered for the request method are tried first, static before
/// dynamic; wildcard-method routes are only consulted when those miss.
#[derive(Debug)]
pub struct Dispatcher<'r, T> {
    registry: &'r Registry<T>,
}

impl<'r, T> Clone for Dispatcher<'r, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, T> Copy for Dispatcher<'r, T> {}

impl<'r, T> Dispatcher<'r, T> {
    pub fn new(registry: &'r Registry<T>) -> Self {
        Self { registry }
    }

    /// `None` means no route matches; the caller decides what a miss looks like.
    pub fn dispatch<'p>(&self, method: &Method, path: &'p str) -> Option<Match<'r, 'p, T>> {
        let found = self
            .registry
            .routes(method)
            .and_then(|routes| find(routes, path))
            .or_else(|| find(self.registry.any_routes(), path));
        match &found {
            Some(_) => trace!("Dispatched {} {}", method, path),
            None => trace!("No route for {} {}", method, path),
        }
        found
    }

    /// Like [`Dispatcher::dispatch`], for a method that has not been parsed yet.
    pub fn dispatch_str<'p>(&self, method: &str, path: &'p str) -> Option<Match<'r, 'p, T>> {
        let method = method.parse::<Method>().ok()?;
        self.dispatch(&method, path)
    }
}

fn find<'r, 'p, T>(routes: &'r MethodRoutes<T>, path: &'p str) -> Option<Match<'r, 'p, T>> {
    if let Some(route) = routes.static_route(path) {
        return Some(Match {
            handler: route.handler(),
            params: Params::absent(route.arguments()),
        });
    }
    // matchers are anchored without the trailing separator, which the root keeps
    let path = match trim_separator(path) {
        "" => path,
        trimmed => trimmed,
    };
    routes.dynamic_routes().iter().find_map(|route| {
        let captures = route.regex().captures(path)?;
        let params = route
            .argument_groups()
            .iter()
            .map(|argument| {
                let value = argument
                    .group
                    .as_deref()
                    .and_then(|group| captures.name(group))
                    .map(|capture| capture.as_str());
                (argument.name.as_str(), value)
            })
            .collect();
        Some(Match {
            handler: route.handler(),
            params: Params::new(params),
        })
    })
}
