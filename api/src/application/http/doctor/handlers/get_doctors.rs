use axum::extract::State;
use foodrec_core::domain::doctor::{entities::Doctor, ports::DoctorService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetDoctorsResponse {
    pub data: Vec<Doctor>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "doctor",
    summary = "List the doctor referral directory",
    responses(
        (status = 200, body = GetDoctorsResponse)
    )
)]
pub async fn get_doctors(
    State(state): State<AppState>,
) -> Result<Response<GetDoctorsResponse>, ApiError> {
    let doctors = state.service.get_doctors().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetDoctorsResponse { data: doctors }))
}
