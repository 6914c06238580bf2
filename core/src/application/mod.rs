use crate::domain::common::{FoodrecConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    disease::PostgresDiseaseRepository,
    doctor::{PostgresDoctorRepository, seed_doctors},
    health::PostgresHealthCheckRepository,
    history::repositories::{PostgresCaseRepository, PostgresFollowUpRepository},
    llm::gemini_client::GeminiLLMClient,
    user::PostgresUserRepository,
};

pub type FoodRecService = Service<
    PostgresUserRepository,
    PostgresDiseaseRepository,
    PostgresCaseRepository,
    PostgresFollowUpRepository,
    PostgresDoctorRepository,
    PostgresHealthCheckRepository,
    GeminiLLMClient,
>;

/// Wires the aggregate service against Postgres and Gemini. Runs migrations
/// and seeds the doctor directory before returning.
pub async fn create_service(config: FoodrecConfig) -> Result<FoodRecService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let doctor_repository = PostgresDoctorRepository::new(postgres.get_db());
    seed_doctors(&doctor_repository).await?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresDiseaseRepository::new(postgres.get_db()),
        PostgresCaseRepository::new(postgres.get_db()),
        PostgresFollowUpRepository::new(postgres.get_db()),
        doctor_repository,
        PostgresHealthCheckRepository::new(postgres.get_db()),
        GeminiLLMClient::new(&config.llm)?,
    ))
}
