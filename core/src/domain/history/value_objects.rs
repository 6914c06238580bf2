use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct GetHistoryInput {
    /// Restrict to cases owned by this user; `None` lists everything.
    pub owner_id: Option<Uuid>,
    /// Zero-based page index.
    pub page: u64,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub case_id: Uuid,
    pub condition: String,
    pub notes: Option<String>,
}
