use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

/// Repository trait for account lookup. Account creation and credential checks
/// live with the upstream identity provider; the api only resolves identities
/// it is handed into full profiles.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
