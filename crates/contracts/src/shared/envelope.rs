use serde::{Deserialize, Serialize};

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Uniform result envelope exchanged with the backend API.
///
/// Every gateway call resolves to this shape, both for responses that came
/// off the wire and for failures synthesized locally (network error, parse
/// error). `data` may be absent on error responses, so it falls back to the
/// payload's `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
            message: None,
            metadata: None,
        }
    }
}

impl<T: Default> ApiResponse<T> {
    /// Envelope for a call that never produced a payload.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: T::default(),
            error: Some(error.into()),
            message: None,
            metadata: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_preserved() {
        let envelope = ApiResponse {
            success: true,
            data: vec!["a".to_string()],
            error: None,
            message: Some("ok".to_string()),
            metadata: Some(ResponseMetadata {
                page: Some(1),
                total: Some(42),
                limit: Some(10),
            }),
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "a");
        assert_eq!(json["message"], "ok");
        assert_eq!(json["metadata"]["total"], 42);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn data_defaults_when_absent() {
        let envelope: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":false,"error":"not found"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("not found"));
    }

    #[test]
    fn failure_carries_empty_payload() {
        let envelope: ApiResponse<Vec<u32>> = ApiResponse::failure("boom");
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }
}
