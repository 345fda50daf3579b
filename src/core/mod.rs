pub mod app;
pub mod builtin_providers;
pub mod config;
pub mod generate;
pub mod message;
pub mod session;
