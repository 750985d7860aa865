use serde::Deserialize;

/// Every subscription API response: `{success, message, data}`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Split into the payload on success or the server's message on failure.
    ///
    /// A successful envelope without `data` yields `None`; callers decide
    /// whether that is acceptable.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else if self.message.trim().is_empty() {
            Err("Request failed".to_string())
        } else {
            Err(self.message)
        }
    }
}
