use std::sync::{Arc, Mutex, MutexGuard};

use contracts::shared::envelope::ApiResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage::TokenStore;

use super::cache::ApiCache;
use super::transport::{Method, Transport, TransportRequest};

/// Invoked when the backend answers 401. The client has already cleared the
/// token store by the time this fires; the handler owns the user-visible
/// part of the session kill (dropping auth state, showing the login view).
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Uniform gateway to the backend REST API.
///
/// Every call resolves to an [`ApiResponse`] envelope; transport and parse
/// failures are folded into `success: false` envelopes instead of being
/// returned as errors. GET responses are memoized under `GET:<path>` with a
/// TTL; mutating calls invalidate every cached GET of the same resource
/// family (first path segment). Invalidation is deliberately coarse: a write
/// to `/products/42` also drops unrelated `/products?page=…` list entries.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: String,
    transport: Box<dyn Transport + Send + Sync>,
    cache: Mutex<ApiCache>,
    tokens: Arc<dyn TokenStore + Send + Sync>,
    on_unauthorized: Mutex<Option<UnauthorizedHandler>>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: impl Transport + Send + Sync + 'static,
        tokens: Arc<dyn TokenStore + Send + Sync>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                base_url: base_url.into(),
                transport: Box::new(transport),
                cache: Mutex::new(ApiCache::new()),
                tokens,
                on_unauthorized: Mutex::new(None),
            }),
        }
    }

    pub fn set_unauthorized_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
        *lock(&self.inner.on_unauthorized) = Some(Arc::new(handler));
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore + Send + Sync> {
        &self.inner.tokens
    }

    /// Cached GET with the default TTL.
    pub async fn get<T>(&self, path: &str) -> ApiResponse<T>
    where
        T: DeserializeOwned + Default,
    {
        self.get_with(path, true, None).await
    }

    /// GET with explicit cache control. A live cached envelope short-circuits
    /// the network entirely; only successful envelopes are stored.
    pub async fn get_with<T>(&self, path: &str, use_cache: bool, ttl_ms: Option<f64>) -> ApiResponse<T>
    where
        T: DeserializeOwned + Default,
    {
        let key = ApiCache::key(Method::Get.as_str(), path);

        if use_cache {
            let hit = lock(&self.inner.cache).get(&key);
            if let Some(value) = hit {
                log::debug!("cache hit for {key}");
                return to_typed(value);
            }
        }

        let value = self.perform(Method::Get, path, None).await;

        if use_cache && envelope_succeeded(&value) {
            lock(&self.inner.cache).put(key, value.clone(), ttl_ms);
        }

        to_typed(value)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        self.mutate(Method::Post, path, body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        self.mutate(Method::Put, path, body).await
    }

    pub async fn delete<T>(&self, path: &str, body: Option<&serde_json::Value>) -> ApiResponse<T>
    where
        T: DeserializeOwned + Default,
    {
        let value = self.perform(Method::Delete, path, body.cloned()).await;
        if envelope_succeeded(&value) {
            self.invalidate_family(path);
        }
        to_typed(value)
    }

    async fn mutate<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let body = match serde_json::to_value(body) {
            Ok(value) => value,
            Err(e) => return ApiResponse::failure(format!("failed to serialize request: {e}")),
        };

        let value = self.perform(method, path, Some(body)).await;
        if envelope_succeeded(&value) {
            self.invalidate_family(path);
        }
        to_typed(value)
    }

    /// Runs one transport round-trip and normalizes the outcome into an
    /// envelope-shaped JSON value.
    async fn perform(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> serde_json::Value {
        let request = TransportRequest {
            method,
            url: format!("{}{}", self.inner.base_url, path),
            bearer: self.inner.tokens.get(),
            body,
        };

        log::debug!("{} {}", method.as_str(), path);

        let response = match self.inner.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{} {path} failed: {e}", method.as_str());
                return failure_value(e.to_string());
            }
        };

        if response.status == 401 {
            log::warn!("{} {path} rejected: session expired", method.as_str());
            self.inner.tokens.clear();
            let handler = lock(&self.inner.on_unauthorized).clone();
            if let Some(handler) = handler {
                handler();
            }
            return failure_value("unauthorized");
        }

        if !response.is_ok() {
            return failure_value(format!("request failed with status {}", response.status));
        }

        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(value) => wrap_envelope(value),
            Err(e) => failure_value(format!("failed to parse response: {e}")),
        }
    }

    fn invalidate_family(&self, path: &str) {
        if let Some(segment) = first_path_segment(path) {
            let prefix = format!("{}:/{segment}", Method::Get.as_str());
            let removed = lock(&self.inner.cache).invalidate_prefix(&prefix);
            if removed > 0 {
                log::debug!("invalidated {removed} cached entries under {prefix}");
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Responses that already carry the envelope pass through; raw payloads get
/// wrapped so callers always see the same shape.
fn wrap_envelope(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(ref map) if map.contains_key("success") => value,
        other => serde_json::json!({ "success": true, "data": other }),
    }
}

fn failure_value(error: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "success": false, "error": error.into() })
}

fn envelope_succeeded(value: &serde_json::Value) -> bool {
    value
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

fn to_typed<T>(value: serde_json::Value) -> ApiResponse<T>
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_value::<ApiResponse<T>>(value) {
        Ok(envelope) => envelope,
        Err(e) => ApiResponse::failure(format!("failed to decode response: {e}")),
    }
}

/// First segment of a path like `/products/42?x=1` → `products`.
fn first_path_segment(path: &str) -> Option<&str> {
    let trimmed = path.trim_start_matches('/');
    let end = trimmed
        .find(|c| c == '/' || c == '?')
        .unwrap_or(trimmed.len());
    let segment = &trimmed[..end];
    (!segment.is_empty()).then_some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::transport::{TransportError, TransportResponse};
    use crate::system::auth::storage::MemoryTokenStore;
    use async_trait::async_trait;
    use futures::executor::block_on;

    type Script =
        Box<dyn Fn(&TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync>;

    struct MockTransport {
        calls: Arc<Mutex<Vec<TransportRequest>>>,
        script: Script,
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            let result = (self.script)(&request);
            self.calls.lock().unwrap().push(request);
            result
        }
    }

    fn ok_body(body: &str) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn client_with(
        tokens: Arc<MemoryTokenStore>,
        script: impl Fn(&TransportRequest) -> Result<TransportResponse, TransportError>
            + Send
            + Sync
            + 'static,
    ) -> (ApiClient, Arc<Mutex<Vec<TransportRequest>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let transport = MockTransport {
            calls: calls.clone(),
            script: Box::new(script),
        };
        let client = ApiClient::new("http://backend.test", transport, tokens);
        (client, calls)
    }

    #[test]
    fn get_within_ttl_skips_the_network() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |_| {
            ok_body(r#"{"success":true,"data":["mug"]}"#)
        });

        let first: ApiResponse<Vec<String>> = block_on(client.get("/products?page=1"));
        let second: ApiResponse<Vec<String>> = block_on(client.get("/products?page=1"));

        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(first.data, vec!["mug"]);
        assert_eq!(second.data, vec!["mug"]);
    }

    #[test]
    fn get_after_ttl_expiry_hits_the_network_again() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |_| {
            ok_body(r#"{"success":true,"data":[]}"#)
        });

        let _: ApiResponse<Vec<String>> = block_on(client.get_with("/products", true, Some(5.0)));
        std::thread::sleep(std::time::Duration::from_millis(25));
        let _: ApiResponse<Vec<String>> = block_on(client.get_with("/products", true, Some(5.0)));

        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn uncached_get_always_hits_the_network() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |_| {
            ok_body(r#"{"success":true,"data":[]}"#)
        });

        let _: ApiResponse<Vec<String>> = block_on(client.get_with("/products", false, None));
        let _: ApiResponse<Vec<String>> = block_on(client.get_with("/products", false, None));

        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn mutation_invalidates_the_resource_family() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |request| {
            match request.method {
                Method::Get => ok_body(r#"{"success":true,"data":[]}"#),
                _ => ok_body(r#"{"success":true,"data":{"id":"p-1"}}"#),
            }
        });

        let _: ApiResponse<Vec<String>> = block_on(client.get("/products?page=1&limit=10"));
        let _: ApiResponse<serde_json::Value> =
            block_on(client.post("/products/42/publish", &serde_json::json!({})));
        let _: ApiResponse<Vec<String>> = block_on(client.get("/products?page=1&limit=10"));

        // one GET, the POST, then a fresh GET because the family was dropped
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn mutation_leaves_other_families_cached() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |request| {
            match request.method {
                Method::Get => ok_body(r#"{"success":true,"data":[]}"#),
                _ => ok_body(r#"{"success":true,"data":null}"#),
            }
        });

        let _: ApiResponse<Vec<String>> = block_on(client.get("/product-types"));
        let _: ApiResponse<serde_json::Value> =
            block_on(client.post("/products", &serde_json::json!({})));
        let _: ApiResponse<Vec<String>> = block_on(client.get("/product-types"));

        // the second /product-types read is served from cache
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn unauthorized_clears_the_token_and_fires_the_handler() {
        let tokens = Arc::new(MemoryTokenStore::with_token("jwt-abc"));
        let (client, _) = client_with(tokens.clone(), |_| {
            Ok(TransportResponse {
                status: 401,
                body: String::new(),
            })
        });

        let fired = Arc::new(Mutex::new(false));
        let flag = fired.clone();
        client.set_unauthorized_handler(move || *flag.lock().unwrap() = true);

        let response: ApiResponse<serde_json::Value> =
            block_on(client.post("/products", &serde_json::json!({"name": "Mug"})));

        assert!(!response.success);
        assert_eq!(tokens.get(), None);
        assert!(*fired.lock().unwrap());
    }

    #[test]
    fn bearer_token_is_attached_to_every_request() {
        let tokens = Arc::new(MemoryTokenStore::with_token("jwt-abc"));
        let (client, calls) = client_with(tokens, |_| ok_body(r#"{"success":true,"data":[]}"#));

        let _: ApiResponse<Vec<String>> = block_on(client.get("/products"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].bearer.as_deref(), Some("jwt-abc"));
        assert_eq!(calls[0].url, "http://backend.test/products");
    }

    #[test]
    fn network_failure_yields_a_failure_envelope_and_is_not_cached() {
        let (client, calls) = client_with(Arc::new(MemoryTokenStore::default()), |_| {
            Err(TransportError::Network("connection refused".to_string()))
        });

        let first: ApiResponse<Vec<String>> = block_on(client.get("/products"));
        let second: ApiResponse<Vec<String>> = block_on(client.get("/products"));

        assert!(!first.success);
        assert!(first.error.unwrap().contains("connection refused"));
        assert!(second.data.is_empty());
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn non_2xx_status_yields_a_failure_envelope() {
        let (client, _) = client_with(Arc::new(MemoryTokenStore::default()), |_| {
            Ok(TransportResponse {
                status: 500,
                body: "oops".to_string(),
            })
        });

        let response: ApiResponse<serde_json::Value> = block_on(client.get("/products"));
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("request failed with status 500"));
    }

    #[test]
    fn raw_payloads_are_wrapped_into_the_envelope() {
        let (client, _) =
            client_with(Arc::new(MemoryTokenStore::default()), |_| ok_body("[1,2,3]"));

        let response: ApiResponse<Vec<u32>> = block_on(client.get_with("/stats", false, None));
        assert!(response.success);
        assert_eq!(response.data, vec![1, 2, 3]);
    }

    #[test]
    fn malformed_body_yields_a_failure_envelope() {
        let (client, _) =
            client_with(Arc::new(MemoryTokenStore::default()), |_| ok_body("not json"));

        let response: ApiResponse<Vec<u32>> = block_on(client.get("/products"));
        assert!(!response.success);
        assert!(response.error.unwrap().contains("failed to parse response"));
    }

    #[test]
    fn first_segment_extraction() {
        assert_eq!(first_path_segment("/products/42?x=1"), Some("products"));
        assert_eq!(first_path_segment("/products?page=1"), Some("products"));
        assert_eq!(first_path_segment("product-types"), Some("product-types"));
        assert_eq!(first_path_segment("/"), None);
    }
}
