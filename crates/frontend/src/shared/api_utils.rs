//! Runtime configuration of the client
//!
//! Resolved once at startup and provided through context.

use leptos::prelude::*;

/// Port the StayMaster REST backend listens on
pub const BACKEND_PORT: u16 = 8040;

const FALLBACK_API_BASE: &str = "http://localhost:8040";

/// Get the base URL for API requests
///
/// A compile-time `STAYMASTER_API_BASE` wins. Otherwise the URL is built from
/// the current window location, using the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8040" or "https://example.com:8040"
/// - `http://localhost:8040` if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("STAYMASTER_API_BASE").filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    match location.hostname() {
        Ok(hostname) if !hostname.is_empty() => base_for(&protocol, &hostname),
        _ => FALLBACK_API_BASE.to_string(),
    }
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// Toast lifetime
    pub toast_timeout_ms: u32,
    /// Delay before an "Unauthorized access" page sends the user to login
    pub redirect_delay_ms: u32,
    pub splash_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base: api_base(),
            ..Self::default()
        };
        log::info!("using API at {}", config.api_base);
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            toast_timeout_ms: 3000,
            redirect_delay_ms: 2000,
            splash_ms: 2000,
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}
