use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetHistoryParams {
    /// Zero-based page index.
    #[param(example = 0)]
    pub page: Option<u64>,
    #[param(example = 10)]
    pub size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchHistoryParams {
    /// Case-insensitive substring match on the disease name.
    pub keyword: String,
}
