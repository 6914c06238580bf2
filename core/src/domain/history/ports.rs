use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    disease::entities::DiseaseEntry,
    history::{
        entities::{CasePage, FollowUpEntry, StoredCase},
        value_objects::{GetHistoryInput, SubmitFeedbackInput},
    },
    recommendation::entities::{ConditionAnalysis, FoodRecommendation},
    user::entities::User,
};

/// Repository trait for stored cases
#[cfg_attr(test, mockall::automock)]
pub trait CaseRepository: Send + Sync {
    /// Inserts the case and resolves (or creates) its disease-dictionary entry
    /// in a single transaction.
    fn create_with_dictionary(
        &self,
        case: StoredCase,
        dictionary: DiseaseEntry,
    ) -> impl Future<Output = Result<StoredCase, CoreError>> + Send;

    fn get_by_id(
        &self,
        case_id: Uuid,
    ) -> impl Future<Output = Result<Option<StoredCase>, CoreError>> + Send;

    /// Deletes the case; follow-up entries go with it via the FK cascade.
    fn delete(&self, case_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn find_page(
        &self,
        owner_id: Option<Uuid>,
        page: u64,
        size: u64,
    ) -> impl Future<Output = Result<CasePage, CoreError>> + Send;

    fn search_by_disease_name(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<StoredCase>, CoreError>> + Send;

    fn update_follow_up_fields(
        &self,
        case: StoredCase,
    ) -> impl Future<Output = Result<StoredCase, CoreError>> + Send;
}

/// Repository trait for follow-up timeline entries
#[cfg_attr(test, mockall::automock)]
pub trait FollowUpRepository: Send + Sync {
    /// Persists the updated parent case and the new entry in one transaction.
    fn append(
        &self,
        case: StoredCase,
        entry: FollowUpEntry,
    ) -> impl Future<Output = Result<FollowUpEntry, CoreError>> + Send;

    fn get_by_case_id(
        &self,
        case_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FollowUpEntry>, CoreError>> + Send;
}

/// Service trait for case history business logic
pub trait HistoryService: Send + Sync {
    /// Maps the in-memory recommendation to a stored record and persists it.
    /// Anonymous submissions (`owner = None`) are stored without an owner.
    fn save_case(
        &self,
        recommendation: &FoodRecommendation,
        owner: Option<&User>,
    ) -> impl Future<Output = Result<StoredCase, CoreError>> + Send;

    fn get_history(
        &self,
        input: GetHistoryInput,
    ) -> impl Future<Output = Result<CasePage, CoreError>> + Send;

    fn get_case(&self, case_id: Uuid)
    -> impl Future<Output = Result<StoredCase, CoreError>> + Send;

    fn delete_case(&self, case_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn search_cases(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<StoredCase>, CoreError>> + Send;

    /// Classifies the patient update, appends a timeline entry and moves the
    /// case's follow-up status. Rejected with `SessionClosed` once the case has
    /// been closed.
    fn submit_feedback(
        &self,
        input: SubmitFeedbackInput,
    ) -> impl Future<Output = Result<ConditionAnalysis, CoreError>> + Send;

    fn get_timeline(
        &self,
        case_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FollowUpEntry>, CoreError>> + Send;

    /// Marks the follow-up session closed, the terminal state.
    fn close_case(
        &self,
        case_id: Uuid,
    ) -> impl Future<Output = Result<StoredCase, CoreError>> + Send;
}
