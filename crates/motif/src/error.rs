use alloc::string::String;

/// A result type whose error defaults to [`Error`].
///
/// The core containers never fail: an empty queue is reported through
/// [`Option`] and an unmatched request through a `Dispatch::Unhandled` value.
/// Only parsing and route registration return this type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `motif` can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The name does not match any [`ThemeKind`].
    ///
    /// [`ThemeKind`]: crate::ThemeKind
    #[error("unknown theme `{name}` (expected one of: light, dark, brown)")]
    UnknownTheme {
        /// The name that failed to parse.
        name: String,
    },

    /// The input is not a `#rrggbb` or `#rrggbbaa` color.
    #[error("invalid color `{input}` (expected #rrggbb or #rrggbbaa)")]
    InvalidColor {
        /// The rejected input.
        input: String,
    },

    /// A route for this request type is already registered.
    ///
    /// The first registration stays in place.
    #[error("a route for `{type_name}` is already registered")]
    DuplicateRoute {
        /// Name of the request type.
        type_name: &'static str,
    },
}
