//! Controller de autenticación y gestión de usuarios

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdatePasswordRequest,
    UpdateUserStatusRequest, UserResponse,
};
use crate::models::user::{UserRole, UserStatus};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let (Some(name), Some(email), Some(password), Some(role)) =
            (request.name, request.email, request.password, request.role)
        else {
            return Err(AppError::BadRequest(
                "Nombre, email, contraseña y rol son requeridos".to_string(),
            ));
        };

        let role = UserRole::from_str(&role)
            .ok_or_else(|| AppError::BadRequest("Rol inválido. Usa 'admin' o 'user'".to_string()))?;

        if self.repository.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "Ya existe un usuario con este email".to_string(),
            ));
        }

        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create(name, email, password_hash, role.as_str().to_string())
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(AppError::BadRequest(
                "Email y contraseña son requeridos".to_string(),
            ));
        };

        // Email desconocido y contraseña incorrecta son indistinguibles
        // para el cliente.
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&password, &user.password)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let jwt_config = JwtConfig::from(&self.config);
        let token = generate_token(&user.id.to_string(), &user.email, &user.role, &jwt_config)?;

        Ok(LoginResponse {
            message: "Inicio de sesión exitoso".to_string(),
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Cambiar la contraseña del usuario conectado. La sesión válida es la
    /// única credencial exigida; no se pide la contraseña anterior.
    pub async fn update_password(
        &self,
        user_id: Uuid,
        request: UpdatePasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let Some(password) = request.password.filter(|p| !p.trim().is_empty()) else {
            return Err(AppError::BadRequest("La contraseña es requerida".to_string()));
        };

        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let updated = self.repository.update_password(user_id, &password_hash).await?;
        if !updated {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(MessageResponse::new("Contraseña actualizada exitosamente"))
    }

    /// Activar o desactivar una cuenta (solo admin). La desactivación no
    /// toca las reservas confirmadas existentes.
    pub async fn update_status(
        &self,
        user_id: Uuid,
        request: UpdateUserStatusRequest,
    ) -> Result<UserResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(UserStatus::from_str)
            .ok_or_else(|| {
                AppError::BadRequest("Estado inválido. Usa 'active' o 'inactive'".to_string())
            })?;

        let user = self
            .repository
            .update_status(user_id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Listar todos los usuarios no-admin (solo admin)
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list_non_admin().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
