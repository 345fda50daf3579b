use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::url::{normalize_base_url, DEFAULT_API_BASE_URL};

/// Environment variable consulted for the backend location.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the generation backend (e.g., "http://localhost:8000")
    pub api_base_url: Option<String>,
    /// Built-in theme name: "dark", "light" or "monochrome"
    pub theme: Option<String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    /// Pick the backend base URL.
    ///
    /// Precedence: command-line flag, then the `API_BASE_URL` environment
    /// value, then the config file, then [`DEFAULT_API_BASE_URL`]. Blank values
    /// are skipped.
    pub fn resolve_api_base_url(&self, cli_value: Option<&str>, env_value: Option<&str>) -> String {
        let chosen = non_blank(cli_value)
            .or_else(|| non_blank(env_value))
            .or_else(|| non_blank(self.api_base_url.as_deref()))
            .unwrap_or(DEFAULT_API_BASE_URL);
        normalize_base_url(chosen)
    }
}
