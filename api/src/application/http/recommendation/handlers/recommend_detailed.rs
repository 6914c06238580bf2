use axum::{Extension, extract::State};
use foodrec_core::domain::{
    disease::entities::Disease,
    history::{entities::StoredCase, ports::HistoryService},
    recommendation::ports::RecommendationService,
};

use crate::application::{
    auth::UserContext,
    http::{
        recommendation::{
            handlers::recommend::RecommendResponse, validators::DetailedRecommendRequest,
        },
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/detailed",
    tag = "recommendation",
    summary = "Generate recommendations with disease-specific overrides",
    description = "Like the basic endpoint, but accepts recovery-time and management-type overrides",
    responses(
        (status = 201, body = RecommendResponse)
    ),
    request_body = DetailedRecommendRequest
)]
pub async fn recommend_detailed(
    State(state): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<DetailedRecommendRequest>,
) -> Result<Response<RecommendResponse>, ApiError> {
    let mut disease = Disease::from_type(
        &payload.disease_name,
        payload.disease_type.as_deref().unwrap_or("chronic"),
    )
    .with_severity(payload.severity.as_deref().unwrap_or("Unknown"));

    if let Some(days) = payload.recovery_days {
        disease = disease.with_recovery_days(days);
    }
    if let Some(management) = payload.management_type {
        disease = disease.with_management_type(management);
    }

    let recommendation = state
        .service
        .get_recommendation(disease, user_context.user.as_ref())
        .await
        .map_err(ApiError::from)?;

    // Same storage fallback as the basic endpoint.
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
