use serde::{Deserialize, Serialize};

/// Uniform response envelope used by every backend endpoint.
///
/// `success == true` carries `data` (delete is the exception and may succeed
/// without a payload); `success == false` carries `error`. The constructors
/// below are the only way the client builds envelopes itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Opaque pagination metadata; see [`PaginationInfo`] for a typed view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            count: None,
            pagination: None,
        }
    }

    /// Success without a payload (delete).
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            error: None,
            count: None,
            pagination: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            count: None,
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_pagination(mut self, pagination: serde_json::Value) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Payload of a successful response, or the error text (falling back to
    /// `default_error` when the backend declared failure without a message).
    ///
    /// A success envelope that is missing its payload is treated as a
    /// failure, which matches how the list/create/update handlers read it.
    pub fn into_data(self, default_error: &str) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| default_error.to_string())),
        }
    }

    /// Like [`ApiResponse::into_data`] but for endpoints where success may
    /// carry no payload.
    pub fn into_unit(self, default_error: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| default_error.to_string()))
        }
    }

    pub fn pagination_info(&self) -> Option<PaginationInfo> {
        self.pagination
            .as_ref()
            .and_then(|raw| serde_json::from_value(raw.clone()).ok())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            error: self.error,
            count: self.count,
            pagination: self.pagination,
        }
    }
}

/// Best-effort typed view of the backend's pagination blob.
///
/// The client never validates this; it is only used to render
/// "page X of Y" and to decide whether next/prev make sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    pub fn from_value(raw: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }
}
