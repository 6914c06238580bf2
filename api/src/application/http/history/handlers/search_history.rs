use axum::extract::{Query, State};
use foodrec_core::domain::history::{entities::StoredCase, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    history::validators::SearchHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchHistoryResponse {
    pub data: Vec<StoredCase>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "history",
    summary = "Search stored cases by disease name",
    responses(
        (status = 200, body = SearchHistoryResponse)
    ),
    params(SearchHistoryParams)
)]
pub async fn search_history(
    Query(params): Query<SearchHistoryParams>,
    State(state): State<AppState>,
) -> Result<Response<SearchHistoryResponse>, ApiError> {
    let cases = state
        .service
        .search_cases(&params.keyword)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchHistoryResponse { data: cases }))
}
