//! DTOs del inventario de vehículos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicule::Vehicule;

/// Request de creación de vehículo (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehiculeRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(required, length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(required, length(min = 1, max = 20))]
    pub plate_number: Option<String>,

    #[validate(required, length(min = 1, max = 50))]
    pub color: Option<String>,

    #[validate(required, range(min = 1))]
    pub seats: Option<i32>,

    // El valor se valida contra FuelType en el controller
    #[validate(required)]
    pub fuel_type: Option<String>,
}

/// Request de actualización completa de vehículo (solo admin).
/// Semántica de reemplazo total: todos los campos son requeridos.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehiculeRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(required, length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(required, length(min = 1, max = 20))]
    pub plate_number: Option<String>,

    #[validate(required, length(min = 1, max = 50))]
    pub color: Option<String>,

    #[validate(required, range(min = 1))]
    pub seats: Option<i32>,

    #[validate(required)]
    pub fuel_type: Option<String>,

    #[validate(required)]
    pub status: Option<String>,
}

/// Request de cambio de estado operacional (solo admin)
#[derive(Debug, Deserialize)]
pub struct UpdateVehiculeStatusRequest {
    pub status: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiculeResponse {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub plate_number: String,
    pub color: String,
    pub seats: i32,
    pub fuel_type: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicule> for VehiculeResponse {
    fn from(v: Vehicule) -> Self {
        Self {
            id: v.id,
            brand: v.brand,
            model: v.model,
            plate_number: v.plate_number,
            color: v.color,
            seats: v.seats,
            fuel_type: v.fuel_type,
            status: v.status,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}
