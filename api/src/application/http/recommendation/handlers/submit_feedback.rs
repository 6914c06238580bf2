use axum::extract::{Path, State};
use foodrec_core::domain::{
    history::{ports::HistoryService, value_objects::SubmitFeedbackInput},
    recommendation::entities::ConditionAnalysis,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recommendation::validators::FeedbackRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub data: ConditionAnalysis,
}

#[utoipa::path(
    post,
    path = "/feedback/{case_id}",
    tag = "recommendation",
    summary = "Submit follow-up feedback on a stored case",
    description = "Classifies the patient update, appends it to the case timeline and moves the follow-up status",
    responses(
        (status = 200, body = FeedbackResponse),
        (status = 404, description = "Case not found"),
        (status = 409, description = "Follow-up session is closed")
    ),
    params(
        ("case_id" = Uuid, Path, description = "Stored case id"),
    ),
    request_body = FeedbackRequest
)]
pub async fn submit_feedback(
    Path(case_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FeedbackRequest>,
) -> Result<Response<FeedbackResponse>, ApiError> {
    let analysis = state
        .service
        .submit_feedback(SubmitFeedbackInput {
            case_id,
            condition: payload.condition,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FeedbackResponse { data: analysis }))
}
