use serde::{Deserialize, Serialize};

/// Response envelope shared by every backend endpoint.
///
/// Exactly one of `data` / `error` is meaningful, selected by `success`.
/// Fields are private so that an envelope can only be built through
/// [`ApiResponse::ok`] / [`ApiResponse::err`] and consumed through the
/// accessors, which keeps call sites from reading `data` on a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ResponseMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    pub fn ok_with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            meta: Some(meta),
            ..Self::ok(data)
        }
    }

    pub fn err(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_error(ApiError::new(code, message))
    }

    pub fn from_error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            meta: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Payload accessor; `None` unless the envelope reports success.
    pub fn data(&self) -> Option<&T> {
        if self.success { self.data.as_ref() } else { None }
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.meta.as_ref()
    }

    /// Collapse the envelope into a plain `Result`.
    ///
    /// A success envelope with a missing payload is treated as malformed.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::new("MALFORMED_RESPONSE", "Success envelope without data"))
        } else {
            Err(self
                .error
                .unwrap_or_else(|| ApiError::new("UNKNOWN_ERROR", "Failure envelope without error")))
        }
    }
}

/// Structured error carried by a failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_round_trip() {
        let response = ApiResponse::ok(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());

        let parsed: ApiResponse<Vec<String>> = serde_json::from_value(json).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.data().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_envelope_hides_data() {
        let response: ApiResponse<u32> = ApiResponse::err("FETCH_ERROR", "upstream down");
        assert!(!response.is_success());
        assert!(response.data().is_none());
        assert_eq!(response.error().unwrap().code, "FETCH_ERROR");
    }

    #[test]
    fn test_into_result() {
        let ok: ApiResponse<u32> = ApiResponse::ok(7);
        assert_eq!(ok.into_result().unwrap(), 7);

        let err: ApiResponse<u32> = ApiResponse::err("NOT_FOUND", "missing");
        let error = err.into_result().unwrap_err();
        assert_eq!(error.code, "NOT_FOUND");
    }

    #[test]
    fn test_malformed_success_envelope() {
        let parsed: ApiResponse<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let error = parsed.into_result().unwrap_err();
        assert_eq!(error.code, "MALFORMED_RESPONSE");
    }
}
