use axum::{Extension, extract::State};
use foodrec_core::domain::history::{
    entities::StoredCase,
    ports::HistoryService,
    value_objects::GetHistoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::UserContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetCasesResponse {
    pub data: Vec<StoredCase>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "case",
    summary = "List the authenticated user's active follow-up cases",
    responses(
        (status = 200, body = GetCasesResponse),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn get_cases(
    State(state): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Response<GetCasesResponse>, ApiError> {
    let user = user_context
        .user
        .as_ref()
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    let page = state
        .service
        .get_history(GetHistoryInput {
            owner_id: Some(user.id),
            page: 0,
            size: 100,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCasesResponse { data: page.content }))
}
