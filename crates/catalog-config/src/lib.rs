pub mod config;
pub mod paths;

pub use config::{BrowseConfig, Config};
pub use paths::PathManager;
