use axum::{Extension, extract::State};
use foodrec_core::domain::{
    disease::entities::Disease,
    history::{entities::StoredCase, ports::HistoryService},
    recommendation::ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::UserContext,
    http::{
        recommendation::validators::RecommendRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    pub data: StoredCase,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Generate dietary recommendations for a disease",
    description = "Asks the AI provider for dietary advice, persists the result and returns the stored case",
    responses(
        (status = 201, body = RecommendResponse)
    ),
    request_body = RecommendRequest
)]
pub async fn recommend(
    State(state): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<RecommendRequest>,
) -> Result<Response<RecommendResponse>, ApiError> {
    let disease = Disease::from_type(
        &payload.disease_name,
        payload.disease_type.as_deref().unwrap_or("chronic"),
    )
    .with_severity(payload.severity.as_deref().unwrap_or("Unknown"));

    let recommendation = state
        .service
        .get_recommendation(disease, user_context.user.as_ref())
        .await
        .map_err(ApiError::from)?;

    // A storage failure after a successful AI call must not cost the caller
    // their recommendation; respond with the unsaved case instead.
    let case = match state
        .service
        .save_case(&recommendation, user_context.user.as_ref())
        .await
    {
        Ok(case) => case,
        Err(e) => {
            tracing::error!("Failed to persist recommendation: {}", e);
            StoredCase::from_recommendation(
                &recommendation,
                user_context.user.as_ref().map(|u| u.id),
            )
        }
    };

    Ok(Response::Created(RecommendResponse { data: case }))
}
