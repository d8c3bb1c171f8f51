use alloc::{boxed::Box, vec::Vec};
use core::{
    any::{Any, type_name},
    fmt,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::chain::{Dispatch, Request, ShortName};

/// Callback run by the last handler of a chain when nothing accepted a
/// request.
pub(crate) type Fallback = Box<dyn Fn(&Request<'_>)>;

/// A link in a chain of responsibility.
///
/// Implementations either accept a request or forward it to their successor.
/// The trait is object safe: chains are built from
/// `Box<dyn RequestHandling>` so each link may accept a different type.
pub trait RequestHandling {
    /// Fully qualified name of the type this handler accepts.
    fn accepts(&self) -> &'static str;

    /// Processes `request` or passes it down the chain.
    fn handle(&self, request: &Request<'_>) -> Dispatch;

    /// The rest of the chain, if any.
    fn successor(&self) -> Option<&dyn RequestHandling> {
        None
    }
}

impl dyn RequestHandling + '_ {
    /// Wraps `request` and hands it to the head of the chain.
    ///
    /// # Example
    /// ```
    /// use motif::{ChainBuilder, Dispatch};
    ///
    /// let chain = ChainBuilder::new()
    ///     .accept::<u8>()
    ///     .accept::<String>()
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     chain.dispatch(&String::from("hello")),
    ///     Dispatch::Handled { handler: "alloc::string::String", hops: 1 },
    /// );
    /// assert_eq!(chain.dispatch(&42_i64), Dispatch::Unhandled { hops: 1 });
    /// ```
    pub fn dispatch<R: Any>(&self, request: &R) -> Dispatch {
        self.handle(&Request::new(request))
    }

    /// Number of handlers from this one to the end of the chain.
    pub fn len(&self) -> usize {
        self.links().count()
    }

    /// Walks the chain from this handler to the end.
    pub fn links(&self) -> impl Iterator<Item = &dyn RequestHandling> + '_ {
        core::iter::successors(Some(self), |&link| link.successor())
    }
}

/// A handler that accepts exactly one request type, `T`.
///
/// A `Handler` exclusively owns the rest of the chain it was built with, so
/// a chain is always finite and acyclic. Dispatch is a linear walk: the first
/// handler whose type matches wins, which costs O(n) in the length of the
/// chain. Prefer [`Router`] when the set of request types is closed.
///
/// [`Router`]: crate::Router
///
/// # Example
/// ```
/// use motif::{Dispatch, Handler};
///
/// struct Date;
/// struct Data;
///
/// let data = Handler::<Data>::terminal();
/// let string = Handler::<String>::new(Some(data.boxed()));
/// let date = Handler::<Date>::new(Some(string.boxed()));
///
/// assert!(date.dispatch(&String::from("x")).is_handled());
/// assert_eq!(date.dispatch(&42), Dispatch::Unhandled { hops: 2 });
/// ```
pub struct Handler<T: Any> {
    action: Option<Box<dyn Fn(&T)>>,
    fallback: Option<Fallback>,
    next: Option<Box<dyn RequestHandling>>,
}

impl<T: Any> Handler<T> {
    /// Creates a handler whose only action is to report that it processed the
    /// request.
    pub fn new(next: Option<Box<dyn RequestHandling>>) -> Self {
        Self {
            action: None,
            fallback: None,
            next,
        }
    }

    /// Creates a handler with no successor.
    pub fn terminal() -> Self {
        Self::new(None)
    }

    /// Creates a handler that runs `action` on every `T` it accepts.
    pub fn with_action(
        action: impl Fn(&T) + 'static,
        next: Option<Box<dyn RequestHandling>>,
    ) -> Self {
        Self {
            action: Some(Box::new(action)),
            fallback: None,
            next,
        }
    }

    /// Runs `report` whenever this handler is the end of the chain and a
    /// request goes unhandled.
    ///
    /// Has no effect on a handler that has a successor.
    #[must_use]
    pub fn on_unhandled(mut self, report: impl Fn(&Request<'_>) + 'static) -> Self {
        self.fallback = Some(Box::new(report));
        self
    }

    /// Moves the handler into a chain link.
    pub fn boxed(self) -> Box<dyn RequestHandling> {
        Box::new(self)
    }

    /// Wraps `request` and handles it.
    pub fn dispatch<R: Any>(&self, request: &R) -> Dispatch {
        self.handle(&Request::new(request))
    }
}

impl<T: Any> RequestHandling for Handler<T> {
    fn accepts(&self) -> &'static str {
        type_name::<T>()
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(handler = %self)))]
    fn handle(&self, request: &Request<'_>) -> Dispatch {
        if let Some(value) = request.downcast_ref::<T>() {
            #[cfg(feature = "tracing")]
            tracing::info!("request processed by {self}");
            if let Some(action) = &self.action {
                action(value);
            }
            return Dispatch::Handled {
                handler: self.accepts(),
                hops: 0,
            };
        }

        let Some(next) = &self.next else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                request = request.type_name(),
                "reached the end of the responder chain"
            );
            if let Some(report) = &self.fallback {
                report(request);
            }
            return Dispatch::Unhandled { hops: 0 };
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "{self} can't handle {} requests - forwarding to {} handler",
            ShortName(request.type_name()),
            ShortName(next.accepts()),
        );
        next.handle(request).forwarded()
    }

    fn successor(&self) -> Option<&dyn RequestHandling> {
        self.next.as_deref()
    }
}

impl<T: Any> fmt::Display for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} handler", ShortName(type_name::<T>()))
    }
}

impl<T: Any> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("accepts", &type_name::<T>())
            .field("next", &self.next.as_ref().map(|next| next.accepts()))
            .finish_non_exhaustive()
    }
}

type Link =
    Box<dyn FnOnce(Option<Box<dyn RequestHandling>>, Option<Fallback>) -> Box<dyn RequestHandling>>;

/// Assembles a handler chain front to back.
///
/// Handlers are listed in dispatch order; [`build`](Self::build) links them
/// from the back so each one owns its successor.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use motif::ChainBuilder;
///
/// let seen = Rc::new(Cell::new(0_u32));
/// let counter = seen.clone();
///
/// let chain = ChainBuilder::new()
///     .accept::<bool>()
///     .accept_with(move |n: &u32| counter.set(counter.get() + *n))
///     .build()
///     .unwrap();
///
/// chain.dispatch(&5_u32);
/// chain.dispatch(&"ignored");
/// assert_eq!(seen.get(), 5);
/// assert_eq!(chain.len(), 2);
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    links: Vec<Link>,
    fallback: Option<Fallback>,
}

impl ChainBuilder {
    /// Starts an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a [`Handler`] for `T` that only reports what it processed.
    #[must_use]
    pub fn accept<T: Any>(mut self) -> Self {
        self.links.push(Box::new(|next, fallback| {
            Self::attach(Handler::<T>::new(next), fallback)
        }));
        self
    }

    /// Appends a [`Handler`] for `T` that runs `action` on each accepted
    /// request.
    #[must_use]
    pub fn accept_with<T: Any>(mut self, action: impl Fn(&T) + 'static) -> Self {
        self.links.push(Box::new(move |next, fallback| {
            Self::attach(Handler::<T>::with_action(action, next), fallback)
        }));
        self
    }

    /// Appends a custom link. `link` receives the rest of the chain and must
    /// forward anything it does not accept.
    ///
    /// A custom link at the end of the chain does its own reporting; the
    /// [`on_unhandled`](Self::on_unhandled) callback is not passed to it.
    #[must_use]
    pub fn link(
        mut self,
        link: impl FnOnce(Option<Box<dyn RequestHandling>>) -> Box<dyn RequestHandling> + 'static,
    ) -> Self {
        self.links
            .push(Box::new(move |next, _: Option<Fallback>| link(next)));
        self
    }

    /// Runs `report` when a request falls off the end of the chain.
    #[must_use]
    pub fn on_unhandled(mut self, report: impl Fn(&Request<'_>) + 'static) -> Self {
        self.fallback = Some(Box::new(report));
        self
    }

    /// Number of links added so far.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no link has been added.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Links the handlers together and returns the head of the chain, or
    /// `None` if no handler was added.
    pub fn build(self) -> Option<Box<dyn RequestHandling>> {
        let mut fallback = self.fallback;
        self.links
            .into_iter()
            .rev()
            .fold(None, |next, link| Some(link(next, fallback.take())))
    }

    fn attach<T: Any>(
        handler: Handler<T>,
        fallback: Option<Fallback>,
    ) -> Box<dyn RequestHandling> {
        match fallback {
            Some(report) => Box::new(Handler {
                fallback: Some(report),
                ..handler
            }),
            None => handler.boxed(),
        }
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("links", &self.links.len())
            .field("on_unhandled", &self.fallback.is_some())
            .finish()
    }
}
