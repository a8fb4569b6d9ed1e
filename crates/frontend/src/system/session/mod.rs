//! Session activity tracking. The last-activity timestamp lives in
//! localStorage; after 30 minutes without activity the UI logs the user
//! out. The arithmetic is kept free of browser types so it is testable.

use crate::shared::api::cache::now_ms;

/// Idle time after which the session is considered over: 30 minutes.
pub const SESSION_TIMEOUT_MS: f64 = 30.0 * 60.0 * 1000.0;

const SESSION_ACTIVITY_KEY: &str = "lastActivityTime";

/// Milliseconds of session left. Zero when there was no recorded activity
/// or the timeout has already passed.
pub fn remaining_ms(last_activity_ms: Option<f64>, now_ms: f64) -> f64 {
    match last_activity_ms {
        Some(last) => (SESSION_TIMEOUT_MS - (now_ms - last)).max(0.0),
        None => 0.0,
    }
}

/// A session only expires if there was activity to measure from.
pub fn is_expired(last_activity_ms: Option<f64>, now_ms: f64) -> bool {
    match last_activity_ms {
        Some(last) => now_ms - last >= SESSION_TIMEOUT_MS,
        None => false,
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Records "now" as the latest user activity.
pub fn touch_activity() {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SESSION_ACTIVITY_KEY, &format!("{}", now_ms()));
    }
}

pub fn last_activity_ms() -> Option<f64> {
    local_storage()?
        .get_item(SESSION_ACTIVITY_KEY)
        .ok()?
        .and_then(|value| value.parse::<f64>().ok())
}

pub fn clear_activity() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_ACTIVITY_KEY);
    }
}
