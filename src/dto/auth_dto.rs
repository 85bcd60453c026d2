//! DTOs de autenticación y gestión de usuarios

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

/// Request de registro de usuario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(required, email)]
    pub email: Option<String>,

    #[validate(required, length(min = 6, max = 100))]
    pub password: Option<String>,

    // El valor se valida contra UserRole en el controller
    #[validate(required)]
    pub role: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request de cambio de contraseña del usuario conectado
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: Option<String>,
}

/// Request de cambio de estado de cuenta (solo admin)
#[derive(Debug, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub status: Option<String>,
}

/// Response de usuario para la API (sin password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// Response genérica con mensaje
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
