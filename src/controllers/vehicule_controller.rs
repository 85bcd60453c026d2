//! Controller del inventario de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::MessageResponse;
use crate::dto::vehicule_dto::{
    CreateVehiculeRequest, UpdateVehiculeRequest, UpdateVehiculeStatusRequest, VehiculeResponse,
};
use crate::models::vehicule::{FuelType, VehiculeStatus};
use crate::repositories::vehicule_repository::VehiculeRepository;
use crate::utils::errors::AppError;

pub struct VehiculeController {
    repository: VehiculeRepository,
}

impl VehiculeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehiculeResponse>, AppError> {
        let vehicules = self.repository.list_all().await?;
        Ok(vehicules.into_iter().map(VehiculeResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehiculeResponse, AppError> {
        let vehicule = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehiculeResponse::from(vehicule))
    }

    pub async fn create(
        &self,
        request: CreateVehiculeRequest,
    ) -> Result<VehiculeResponse, AppError> {
        request.validate()?;

        let (Some(brand), Some(model), Some(plate_number), Some(color), Some(seats), Some(fuel_type)) = (
            request.brand,
            request.model,
            request.plate_number,
            request.color,
            request.seats,
            request.fuel_type,
        ) else {
            return Err(AppError::BadRequest(
                "Marca, modelo, matrícula, color, número de asientos y tipo de combustible son requeridos"
                    .to_string(),
            ));
        };

        let fuel_type = FuelType::from_str(&fuel_type).ok_or_else(|| {
            AppError::BadRequest(
                "Tipo de combustible inválido. Usa 'gasoline', 'diesel', 'electric' o 'hybrid'"
                    .to_string(),
            )
        })?;

        if self.repository.plate_number_exists(&plate_number).await? {
            return Err(AppError::Conflict(
                "Ya existe un vehículo con esta matrícula".to_string(),
            ));
        }

        let vehicule = self
            .repository
            .create(
                brand,
                model,
                plate_number,
                color,
                seats,
                fuel_type.as_str().to_string(),
            )
            .await?;

        Ok(VehiculeResponse::from(vehicule))
    }

    /// Reemplazo completo de los datos de un vehículo
    pub async fn update_info(
        &self,
        id: Uuid,
        request: UpdateVehiculeRequest,
    ) -> Result<VehiculeResponse, AppError> {
        request.validate()?;

        let (
            Some(brand),
            Some(model),
            Some(plate_number),
            Some(color),
            Some(seats),
            Some(fuel_type),
            Some(status),
        ) = (
            request.brand,
            request.model,
            request.plate_number,
            request.color,
            request.seats,
            request.fuel_type,
            request.status,
        )
        else {
            return Err(AppError::BadRequest(
                "Todos los campos del vehículo son requeridos".to_string(),
            ));
        };

        let fuel_type = FuelType::from_str(&fuel_type).ok_or_else(|| {
            AppError::BadRequest(
                "Tipo de combustible inválido. Usa 'gasoline', 'diesel', 'electric' o 'hybrid'"
                    .to_string(),
            )
        })?;

        let status = VehiculeStatus::from_str(&status).ok_or_else(|| {
            AppError::BadRequest(
                "Estado inválido. Usa 'operational' o 'maintenance'".to_string(),
            )
        })?;

        let vehicule = self
            .repository
            .update_info(
                id,
                brand,
                model,
                plate_number,
                color,
                seats,
                fuel_type.as_str().to_string(),
                status.as_str().to_string(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehiculeResponse::from(vehicule))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateVehiculeStatusRequest,
    ) -> Result<VehiculeResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(VehiculeStatus::from_str)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Estado inválido. Usa 'operational' o 'maintenance'".to_string(),
                )
            })?;

        let vehicule = self
            .repository
            .update_status(id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehiculeResponse::from(vehicule))
    }

    /// Eliminar un vehículo; sus reservas caen en cascada en la base
    pub async fn remove(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(MessageResponse::new("Vehículo eliminado exitosamente"))
    }
}
