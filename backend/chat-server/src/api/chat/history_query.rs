use crate::api::error::{ApiError, Result as ApiResult};

use serde::Deserialize;

/// Query string of `GET /chat/history`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

impl HistoryQuery {
    /// `None` means the whole history
    #[track_caller]
    pub fn limit(&self) -> ApiResult<Option<usize>> {
        match self.limit {
            None => Ok(None),
            Some(limit) => usize::try_from(limit)
                .map(Some)
                .map_err(|_| ApiError::binding(format!("limit: must not be negative, got {limit}"))),
        }
    }
}
