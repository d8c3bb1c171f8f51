use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};
use core::{
    any::{Any, TypeId, type_name},
    fmt,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "tracing")]
use crate::chain::ShortName;
use crate::{
    Error, Result,
    chain::{Dispatch, Fallback, Request},
};

struct Route {
    type_name: &'static str,
    action: Box<dyn Fn(&Request<'_>)>,
}

/// A closed dispatch table mapping each request type to exactly one action.
///
/// Where a [`Handler`] chain probes every link in turn, a `Router` looks the
/// request's [`TypeId`] up directly. Use it when every request type is known
/// up front; use a chain when links must be added by code that does not know
/// the others.
///
/// [`Handler`]: crate::Handler
///
/// # Example
/// ```
/// use motif::{Dispatch, Error, Router};
///
/// let mut router = Router::new();
/// router.accept::<String>()?.route(|n: &u32| assert_eq!(*n, 7))?;
///
/// assert!(router.dispatch(&7_u32).is_handled());
/// assert_eq!(router.dispatch(&1.5_f64), Dispatch::Unhandled { hops: 0 });
/// assert!(matches!(
///     router.accept::<String>(),
///     Err(Error::DuplicateRoute { .. })
/// ));
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct Router {
    routes: BTreeMap<TypeId, Route>,
    fallback: Option<Fallback>,
}

impl Router {
    /// Creates a router with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route for `T` that only reports what it processed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoute`] if `T` already has a route. The
    /// existing route is kept.
    pub fn accept<T: Any>(&mut self) -> Result<&mut Self> {
        self.insert::<T>(Box::new(|_: &Request<'_>| {}))
    }

    /// Registers `action` as the route for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoute`] if `T` already has a route. The
    /// existing route is kept.
    pub fn route<T: Any>(&mut self, action: impl Fn(&T) + 'static) -> Result<&mut Self> {
        self.insert::<T>(Box::new(move |request: &Request<'_>| {
            if let Some(value) = request.downcast_ref::<T>() {
                action(value);
            }
        }))
    }

    /// Runs `report` for every request that matches no route.
    pub fn on_unhandled(&mut self, report: impl Fn(&Request<'_>) + 'static) -> &mut Self {
        self.fallback = Some(Box::new(report));
        self
    }

    /// Returns `true` if `T` has a route.
    pub fn contains<T: Any>(&self) -> bool {
        self.routes.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Wraps `request` and routes it.
    pub fn dispatch<R: Any>(&self, request: &R) -> Dispatch {
        self.handle(&Request::new(request))
    }

    /// Runs the route registered for the request's type.
    ///
    /// The lookup is O(log n) in the number of routes and never forwards, so
    /// `hops` is always zero.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(request = request.type_name())))]
    pub fn handle(&self, request: &Request<'_>) -> Dispatch {
        match self.routes.get(&request.type_id()) {
            Some(route) => {
                #[cfg(feature = "tracing")]
                tracing::info!("request processed by {} route", ShortName(route.type_name));
                (route.action)(request);
                Dispatch::Handled {
                    handler: route.type_name,
                    hops: 0,
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    request = request.type_name(),
                    "no route for {} requests",
                    ShortName(request.type_name())
                );
                if let Some(report) = &self.fallback {
                    report(request);
                }
                Dispatch::Unhandled { hops: 0 }
            }
        }
    }

    fn insert<T: Any>(&mut self, action: Box<dyn Fn(&Request<'_>)>) -> Result<&mut Self> {
        let type_name = type_name::<T>();
        if self.contains::<T>() {
            return Err(Error::DuplicateRoute { type_name });
        }
        self.routes.insert(TypeId::of::<T>(), Route { type_name, action });
        Ok(self)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self
                    .routes
                    .values()
                    .map(|route| route.type_name)
                    .collect::<Vec<_>>(),
            )
            .field("on_unhandled", &self.fallback.is_some())
            .finish()
    }
}
