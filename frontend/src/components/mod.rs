pub mod fetched;
pub mod footer;
pub mod navbar;

pub use fetched::fetched;
pub use footer::Footer;
pub use navbar::Navbar;
