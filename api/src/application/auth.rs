use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use foodrec_core::domain::user::{entities::User, ports::UserRepository};
use tracing::error;

use super::http::server::app_state::AppState;

/// Identity resolved for the current request. Authentication itself happens
/// upstream; the gateway forwards the caller's username in `x-username`.
/// Requests without the header (or with an unknown username) run anonymously.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user: Option<User>,
}

pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let mut user = None;

    if let Some(header) = req.headers().get("x-username")
        && let Ok(username) = header.to_str()
        && !username.is_empty()
    {
        match state.user_repository.get_by_username(username).await {
            Ok(found) => user = found,
            Err(e) => {
                // Lookup failures degrade to anonymous rather than failing
                // the request.
                error!("Failed to resolve user '{}': {}", username, e);
            }
        }
    }

    req.extensions_mut().insert(UserContext { user });

    Ok(next.run(req).await)
}
