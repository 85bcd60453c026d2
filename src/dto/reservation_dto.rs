//! DTOs del motor de reservas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::reservation::Reservation;

/// Request de creación de reserva.
///
/// Los campos son opcionales a nivel de deserialización: la secuencia de
/// admisión valida presencia y formato con los mensajes del dominio, en
/// lugar de delegar en el rechazo genérico del extractor JSON.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub vehicule_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub motif: Option<String>,
}

/// Response de reserva para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicule_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub motif: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            vehicule_id: r.vehicule_id,
            start_date: r.start_date,
            end_date: r.end_date,
            status: r.status,
            motif: r.motif,
            created_at: r.created_at,
        }
    }
}

/// Reserva del usuario con el resumen del vehículo (JOIN con vehicules)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationWithVehicule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicule_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub motif: String,
    pub created_at: DateTime<Utc>,
    pub brand: String,
    pub model: String,
    pub plate_number: String,
}

/// Reserva con detalle de usuario y vehículo (vista de administración)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationWithDetails {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub motif: String,
    pub user_name: String,
    pub email: String,
    pub brand: String,
    pub model: String,
    pub plate_number: String,
}
