pub use error_fallback::ErrorView;
pub use not_found::NotFound;
mod error;
mod error_fallback;
mod not_found;
pub use error::{Context, Error, ErrorKind, Result};
