use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::{error, info};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        doctor::{entities::Doctor, ports::DoctorRepository},
    },
    entity::doctors::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDoctorRepository {
    pub db: DatabaseConnection,
}

impl PostgresDoctorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DoctorRepository for PostgresDoctorRepository {
    async fn list(&self) -> Result<Vec<Doctor>, CoreError> {
        let doctors = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list doctors: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Doctor::from)
            .collect();

        Ok(doctors)
    }

    async fn count(&self) -> Result<u64, CoreError> {
        Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count doctors: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn create(&self, doctor: Doctor) -> Result<Doctor, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(doctor.id),
            name: Set(doctor.name.clone()),
            specialization: Set(doctor.specialization.clone()),
            hospital: Set(doctor.hospital.clone()),
            phone_number: Set(doctor.phone_number.clone()),
            location: Set(doctor.location.clone()),
            image_url: Set(doctor.image_url.clone()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Doctor::from)
        .map_err(|e| {
            error!("Failed to create doctor: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }
}

/// Seeds the referral directory on first boot. Skipped entirely once any
/// doctor row exists.
pub async fn seed_doctors(repository: &PostgresDoctorRepository) -> Result<(), CoreError> {
    if repository.count().await? > 0 {
        return Ok(());
    }

    let doctors = [
        Doctor::new(
            "Dr. Sarah Johnson",
            "Nutritionist",
            "Siloam Hospital",
            "+62-812-1111-2222",
            "Jakarta",
            "https://cdn-icons-png.flaticon.com/512/3774/3774299.png",
        ),
        Doctor::new(
            "Dr. Budi Santoso",
            "Gastroenterologist",
            "RS Cipto Mangunkusumo",
            "+62-813-3333-4444",
            "Jakarta",
            "https://cdn-icons-png.flaticon.com/512/2785/2785482.png",
        ),
        Doctor::new(
            "Dr. Linda Wijaya",
            "General Practitioner",
            "Klinik Sehat",
            "+62-815-5555-6666",
            "Bandung",
            "https://cdn-icons-png.flaticon.com/512/3774/3774035.png",
        ),
        Doctor::new(
            "Dr. Kevin Lim",
            "Nutritionist",
            "Bali Royal Hospital",
            "+62-817-7777-8888",
            "Denpasar",
            "https://cdn-icons-png.flaticon.com/512/387/387561.png",
        ),
    ];

    for doctor in doctors {
        repository.create(doctor).await?;
    }

    info!("Seeded doctor referral directory");
    Ok(())
}
