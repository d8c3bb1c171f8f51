use core::{
    any::{Any, TypeId},
    fmt::{self, Write},
};

/// A type-erased request travelling down a handler chain.
///
/// Carries the name of the concrete type alongside the value, so handlers can
/// report what they could not handle.
#[derive(Clone, Copy)]
pub struct Request<'a> {
    value: &'a (dyn Any + 'static),
    type_name: &'static str,
}

impl<'a> Request<'a> {
    /// Wraps a reference to any `'static` value.
    pub fn new<R: Any>(value: &'a R) -> Self {
        Self {
            value,
            type_name: core::any::type_name::<R>(),
        }
    }

    /// Fully qualified name of the request's concrete type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The tag used to match the request against a handler.
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Returns `true` if the request is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns the request as a `T`, or `None` if it is some other type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// How a request left a handler chain or router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// A handler accepted the request and ran its action.
    Handled {
        /// Fully qualified name of the type the handler accepts.
        handler: &'static str,
        /// How many times the request was forwarded before it was accepted.
        hops: usize,
    },
    /// Nothing accepted the request. The end of the chain has already
    /// reported it.
    Unhandled {
        /// How many times the request was forwarded before the chain ran out.
        hops: usize,
    },
}

impl Dispatch {
    /// Returns `true` if a handler accepted the request.
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Name of the accepted type, if any handler accepted the request.
    pub const fn handler(&self) -> Option<&'static str> {
        match self {
            Self::Handled { handler, .. } => Some(*handler),
            Self::Unhandled { .. } => None,
        }
    }

    /// Number of forwards the request went through.
    pub const fn hops(&self) -> usize {
        match self {
            Self::Handled { hops, .. } | Self::Unhandled { hops } => *hops,
        }
    }

    /// Counts one more forward. Custom links call this on whatever their
    /// successor returns.
    pub const fn forwarded(self) -> Self {
        match self {
            Self::Handled { handler, hops } => Self::Handled {
                handler,
                hops: hops + 1,
            },
            Self::Unhandled { hops } => Self::Unhandled { hops: hops + 1 },
        }
    }
}

/// Displays a type name with every module path stripped, including inside
/// generic arguments: `alloc::vec::Vec<alloc::string::String>` shows as
/// `Vec<String>`.
pub(crate) struct ShortName(pub(crate) &'static str);

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        loop {
            let end = rest
                .find(|c: char| {
                    matches!(c, '<' | '>' | ',' | '(' | ')' | '[' | ']' | ';' | '&' | '*' | ' ')
                })
                .unwrap_or(rest.len());
            let (path, tail) = rest.split_at(end);
            f.write_str(path.rsplit("::").next().unwrap_or(path))?;

            let mut chars = tail.chars();
            match chars.next() {
                Some(delimiter) => f.write_char(delimiter)?,
                None => return Ok(()),
            }
            rest = chars.as_str();
        }
    }
}
