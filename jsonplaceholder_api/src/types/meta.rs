use serde::{Deserialize, Serialize};

/// Envelope returned by every client call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    /// Reason phrase for `status`, empty when the code has none.
    pub status_text: String,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
