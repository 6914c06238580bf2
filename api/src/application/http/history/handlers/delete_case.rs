use axum::extract::{Path, State};
use foodrec_core::domain::history::ports::HistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteCaseResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{case_id}",
    tag = "history",
    summary = "Delete a stored case and its follow-up timeline",
    responses(
        (status = 200, body = DeleteCaseResponse),
        (status = 404, description = "Case not found")
    ),
    params(
        ("case_id" = Uuid, Path, description = "Stored case id"),
    )
)]
pub async fn delete_case(
    Path(case_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCaseResponse>, ApiError> {
    state
        .service
        .delete_case(case_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCaseResponse {
        message: format!("Case {} deleted", case_id),
    }))
}
