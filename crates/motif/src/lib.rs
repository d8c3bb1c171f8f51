#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "chain")]
mod chain;
mod error;
#[cfg(feature = "queue")]
mod queue;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "theme")]
mod theme;

#[cfg_attr(docsrs, doc(cfg(feature = "chain")))]
#[cfg(feature = "chain")]
pub use crate::chain::*;
pub use crate::error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "queue")))]
#[cfg(feature = "queue")]
pub use crate::queue::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub use crate::serde::*;
#[cfg_attr(docsrs, doc(cfg(feature = "theme")))]
#[cfg(feature = "theme")]
pub use crate::theme::*;
