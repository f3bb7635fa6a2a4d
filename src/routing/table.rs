//! Route table: path → handler lookup.
//!
//! # Responsibilities
//! - Hold the fixed path → HandlerRef mapping
//! - Reject duplicate route registration
//! - Answer exact-match lookups deterministically

use std::collections::HashMap;

use thiserror::Error;

/// Opaque reference to a view-construction capability.
///
/// The router never dereferences this; the host's rendering collaborator
/// resolves it to a concrete view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerRef(u16);

impl HandlerRef {
    fn new(id: u16) -> Self {
        Self(id)
    }

    /// Index into the table's handler name registry.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Errors from route registration.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route for this path is already registered.
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),
}

/// Static mapping from URL path to handler.
///
/// Populated once at process start and never mutated afterwards; the
/// dispatcher holds it immutably. Lookup is an exact, case-sensitive
/// string match on the path.
#[derive(Debug, Default)]
pub struct RouteTable {
    /// path → handler, unique keys.
    routes: HashMap<String, HandlerRef>,

    /// Handler names for diagnostics, indexed by HandlerRef.
    handler_names: Vec<String>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the built-in benchmark routes.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        // Fixed route list; both registrations are on fresh paths.
        for (path, name) in [
            ("/RenderComponentThroughput", "RenderComponentThroughput"),
            ("/TTI", "TTIView"),
        ] {
            table
                .register(path, name)
                .unwrap_or_else(|_| unreachable!("default routes are unique"));
        }
        table
    }

    /// Register a route, assigning a fresh [`HandlerRef`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRoute`] if `path` is already
    /// registered.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        handler_name: impl Into<String>,
    ) -> Result<HandlerRef, RouteError> {
        let path = path.into();
        if self.routes.contains_key(&path) {
            return Err(RouteError::DuplicateRoute(path));
        }

        let handler = HandlerRef::new(self.handler_names.len() as u16);
        self.handler_names.push(handler_name.into());
        self.routes.insert(path, handler);
        Ok(handler)
    }

    /// Look up the handler for a path.
    ///
    /// Exact match only, case-sensitive, deterministic, side-effect-free.
    pub fn lookup(&self, path: &str) -> Option<HandlerRef> {
        self.routes.get(path).copied()
    }

    /// Diagnostic name of a handler.
    pub fn handler_name(&self, handler: HandlerRef) -> Option<&str> {
        self.handler_names.get(handler.as_usize()).map(String::as_str)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over registered `(path, handler)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, HandlerRef)> {
        self.routes.iter().map(|(path, &h)| (path.as_str(), h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_registered() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.len(), 2);

        let tti = table.lookup("/TTI").unwrap();
        assert_eq!(table.handler_name(tti), Some("TTIView"));
        assert!(table.lookup("/RenderComponentThroughput").is_some());
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let table = RouteTable::with_defaults();

        assert!(table.lookup("/TTI/").is_none()); // no trailing-slash normalization
        assert!(table.lookup("/tti").is_none()); // case-sensitive
        assert!(table.lookup("/TT").is_none()); // no prefix matching
        assert!(table.lookup("TTI").is_none());
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let mut table = RouteTable::new();
        table.register("/Bench", "BenchView").unwrap();

        let err = table.register("/Bench", "OtherView").unwrap_err();
        assert!(matches!(err, RouteError::DuplicateRoute(p) if p == "/Bench"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_handler_refs_are_distinct() {
        let mut table = RouteTable::new();
        let a = table.register("/A", "A").unwrap();
        let b = table.register("/B", "B").unwrap();
        assert_ne!(a, b);
        assert_eq!(table.lookup("/A"), Some(a));
        assert_eq!(table.lookup("/B"), Some(b));
    }
}
