mod iter;
mod linked;

pub use iter::*;
pub use linked::*;
