mod color;
mod kind;
mod label;

pub use color::*;
pub use kind::*;
pub use label::*;
