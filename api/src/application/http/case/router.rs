use super::handlers::{
    close_case::{__path_close_case, close_case},
    get_case_timeline::{__path_get_case_timeline, get_case_timeline},
    get_cases::{__path_get_cases, get_cases},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_cases, get_case_timeline, close_case))]
pub struct CaseApiDoc;

pub fn case_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/cases", state.args.server.root_path),
            get(get_cases),
        )
        .route(
            &format!("{}/cases/{{case_id}}/timeline", state.args.server.root_path),
            get(get_case_timeline),
        )
        .route(
            &format!("{}/cases/{{case_id}}/close", state.args.server.root_path),
            post(close_case),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
