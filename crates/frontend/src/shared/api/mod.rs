//! Gateway layer between the UI and the backend REST API: a typed client
//! with transparent auth attachment, TTL response caching and coarse
//! write-through invalidation.

pub mod cache;
pub mod client;
pub mod transport;

pub use client::ApiClient;

/// Base URL of the backend API, derived from the current window location.
/// The backend listens on port 3000 next to wherever the panel is served.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{protocol}//{hostname}:3000")
}
