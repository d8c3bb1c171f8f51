mod handler;
mod request;
mod router;
#[cfg(test)]
mod tests;

pub use handler::*;
pub use request::*;
pub use router::*;
