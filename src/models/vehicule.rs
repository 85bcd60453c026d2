//! Modelo de Vehicule
//!
//! Struct y enums del inventario de vehículos (tabla `vehicules`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de combustible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gasoline" => Some(FuelType::Gasoline),
            "diesel" => Some(FuelType::Diesel),
            "electric" => Some(FuelType::Electric),
            "hybrid" => Some(FuelType::Hybrid),
            _ => None,
        }
    }
}

/// Estado operacional del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehiculeStatus {
    Operational,
    Maintenance,
}

impl VehiculeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehiculeStatus::Operational => "operational",
            VehiculeStatus::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "operational" => Some(VehiculeStatus::Operational),
            "maintenance" => Some(VehiculeStatus::Maintenance),
            _ => None,
        }
    }
}

/// Vehicule - mapea exactamente a la tabla vehicules
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicule {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub plate_number: String,
    pub color: String,
    pub seats: i32,
    pub fuel_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
