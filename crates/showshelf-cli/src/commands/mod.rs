pub mod browse;
pub mod catalog;
pub mod config;
pub mod prompts;
