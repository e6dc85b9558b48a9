use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl PaginationRequest {
    /// Clamps to the bounds the listing queries accept.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, 200),
            offset: self.offset.max(0),
        }
    }
}