use super::handlers::get_doctors::{__path_get_doctors, get_doctors};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_doctors))]
pub struct DoctorApiDoc;

pub fn doctor_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/doctors", state.args.server.root_path),
        get(get_doctors),
    )
}
