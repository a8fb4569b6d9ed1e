use wasm_bindgen::JsCast;

const ACCESS_TOKEN_COOKIE: &str = "accessToken";
const COOKIE_MAX_AGE_SECS: u32 = 86_400;

/// Where the bearer token lives between page loads. The gateway reads it on
/// every request and clears it when the backend rejects the session, so the
/// store is a seam rather than a module-level global.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token storage backed by the `accessToken` browser cookie (1-day max-age).
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|pair| {
                pair.strip_prefix(ACCESS_TOKEN_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn set(&self, token: &str) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&format!(
                "{ACCESS_TOKEN_COOKIE}={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}"
            ));
        }
    }

    fn clear(&self) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&format!("{ACCESS_TOKEN_COOKIE}=; path=/; max-age=0"));
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}
