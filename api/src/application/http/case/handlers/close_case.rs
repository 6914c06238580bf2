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
pub struct CloseCaseResponse {
    pub data: StoredCase,
}

#[utoipa::path(
    post,
    path = "/{case_id}/close",
    tag = "case",
    summary = "Close a follow-up session",
    description = "Marks the session closed so it accepts no further feedback. Closing an already-closed case is a no-op",
    responses(
        (status = 200, body = CloseCaseResponse),
        (status = 404, description = "Case not found")
    ),
    params(
        ("case_id" = Uuid, Path, description = "Stored case id"),
    )
)]
pub async fn close_case(
    Path(case_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CloseCaseResponse>, ApiError> {
    let case = state
        .service
        .close_case(case_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CloseCaseResponse { data: case }))
}
