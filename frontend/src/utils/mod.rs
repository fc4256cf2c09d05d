mod api;
#[cfg(test)]
mod fake;
mod title;
mod transport;

pub use api::*;
#[cfg(test)]
pub use fake::{endpoint, FakeTransport};
pub use title::*;
pub use transport::*;
