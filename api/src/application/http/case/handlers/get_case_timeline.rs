use axum::extract::{Path, State};
use foodrec_core::domain::history::{entities::FollowUpEntry, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetCaseTimelineResponse {
    pub data: Vec<FollowUpEntry>,
}

#[utoipa::path(
    get,
    path = "/{case_id}/timeline",
    tag = "case",
    summary = "Fetch a case's follow-up timeline, newest first",
    responses(
        (status = 200, body = GetCaseTimelineResponse),
        (status = 404, description = "Case not found")
    ),
    params(
        ("case_id" = Uuid, Path, description = "Stored case id"),
    )
)]
pub async fn get_case_timeline(
    Path(case_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCaseTimelineResponse>, ApiError> {
    let entries = state
        .service
        .get_timeline(case_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCaseTimelineResponse { data: entries }))
}
