#[cfg(feature = "theme")]
mod color;
#[cfg(feature = "queue")]
mod queue;
#[cfg(all(test, feature = "queue", feature = "theme"))]
mod tests;

#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "theme"))))]
#[cfg(feature = "theme")]
pub use color::*;
