//! Frontend Configuration
//!
//! The browser bundle has no process environment, so the backend location
//! is fixed at build time (`TODO_API_BASE_URL=... trunk build`).

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match option_env!("TODO_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
