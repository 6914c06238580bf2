use axum::extract::State;
use foodrec_core::domain::disease::{
    entities::{DiseaseEntry, DiseaseType},
    ports::DiseaseService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDiseasesResponse {
    pub data: Vec<DiseaseEntry>,
    pub acute_count: u64,
    pub chronic_count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "disease",
    summary = "List the disease dictionary",
    description = "Dictionary entries accumulate as diseases are recommended for the first time",
    responses(
        (status = 200, body = GetDiseasesResponse)
    )
)]
pub async fn get_diseases(
    State(state): State<AppState>,
) -> Result<Response<GetDiseasesResponse>, ApiError> {
    let data = state
        .service
        .get_dictionary()
        .await
        .map_err(ApiError::from)?;
    let acute_count = state
        .service
        .count_by_type(DiseaseType::Acute)
        .await
        .map_err(ApiError::from)?;
    let chronic_count = state
        .service
        .count_by_type(DiseaseType::Chronic)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDiseasesResponse {
        data,
        acute_count,
        chronic_count,
    }))
}
