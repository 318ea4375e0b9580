use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope shared by every endpoint and by the API client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error_fields() {
        let body = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert!(body.get("message").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn failure_round_trips() {
        let json = r#"{"success":false,"message":"Missing required fields"}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Missing required fields"));
        assert!(parsed.data.is_none());
    }
}
