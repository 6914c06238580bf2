use axum::extract::{Path, State};
use foodrec_core::domain::history::{entities::StoredCase, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetCaseResponse {
    pub data: StoredCase,
}

#[utoipa::path(
    get,
    path = "/{case_id}",
    tag = "history",
    summary = "Fetch a single stored case",
    responses(
        (status = 200, body = GetCaseResponse),
        (status = 404, description = "Case not found")
    ),
    params(
        ("case_id" = Uuid, Path, description = "Stored case id"),
    )
)]
pub async fn get_case(
    Path(case_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCaseResponse>, ApiError> {
    let case = state
        .service
        .get_case(case_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCaseResponse { data: case }))
}
