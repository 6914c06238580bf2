use super::handlers::{
    recommend::{__path_recommend, recommend},
    recommend_detailed::{__path_recommend_detailed, recommend_detailed},
    submit_feedback::{__path_submit_feedback, submit_feedback},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend, recommend_detailed, submit_feedback))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommend", state.args.server.root_path),
            post(recommend),
        )
        .route(
            &format!("{}/recommend/detailed", state.args.server.root_path),
            post(recommend_detailed),
        )
        .route(
            &format!("{}/recommend/feedback/{{case_id}}", state.args.server.root_path),
            post(submit_feedback),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
