use super::handlers::get_diseases::{__path_get_diseases, get_diseases};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_diseases))]
pub struct DiseaseApiDoc;

pub fn disease_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/diseases", state.args.server.root_path),
        get(get_diseases),
    )
}
