pub mod catalog;
pub mod seed;
pub mod session;

pub use catalog::Catalog;
pub use session::Session;
