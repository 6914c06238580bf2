use axum::{
    Extension,
    extract::{Query, State},
};
use foodrec_core::domain::history::{
    entities::CasePage,
    ports::HistoryService,
    value_objects::GetHistoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::UserContext,
    http::{
        history::validators::GetHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetHistoryResponse {
    pub data: CasePage,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Browse stored cases, newest first",
    description = "Authenticated callers see their own cases; anonymous callers see unowned ones included in the full listing",
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
    params(GetHistoryParams)
)]
pub async fn get_history(
    Query(params): Query<GetHistoryParams>,
    State(state): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let page = state
        .service
        .get_history(GetHistoryInput {
            owner_id: user_context.user.as_ref().map(|u| u.id),
            page: params.page.unwrap_or(0),
            size: params.size.unwrap_or(10),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: page }))
}
