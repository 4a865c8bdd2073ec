pub mod config;
pub mod framework;
