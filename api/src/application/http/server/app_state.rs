use std::sync::Arc;

use foodrec_core::{
    application::FoodRecService, infrastructure::user::repository::PostgresUserRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodRecService,
    pub user_repository: Arc<PostgresUserRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: FoodRecService,
        user_repository: PostgresUserRepository,
    ) -> Self {
        Self {
            args,
            service,
            user_repository: Arc::new(user_repository),
        }
    }
}
