pub mod case_repository;
pub mod follow_up_repository;

pub use case_repository::PostgresCaseRepository;
pub use follow_up_repository::PostgresFollowUpRepository;
