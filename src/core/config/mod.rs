pub mod data;
pub mod io;

pub use data::{Config, API_BASE_URL_ENV};
pub use io::ConfigError;
