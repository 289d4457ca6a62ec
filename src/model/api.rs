use serde::{Deserialize, Serialize};

/// Error payload returned by failed API requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
