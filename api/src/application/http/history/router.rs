use super::handlers::{
    delete_case::{__path_delete_case, delete_case},
    get_case::{__path_get_case, get_case},
    get_history::{__path_get_history, get_history},
    search_history::{__path_search_history, search_history},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_history, search_history, get_case, delete_case))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history),
        )
        .route(
            &format!("{}/history/search", state.args.server.root_path),
            get(search_history),
        )
        .route(
            &format!("{}/history/{{case_id}}", state.args.server.root_path),
            get(get_case).delete(delete_case),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
