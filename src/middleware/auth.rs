//! Política de acceso
//!
//! Extractores de autenticación y de rol: todos los chequeos de
//! credenciales y de rol del sistema pasan por aquí, nunca por guardas
//! sueltas en los handlers.

use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Usuario autenticado, extraído del bearer token.
///
/// Header ausente o mal formado -> 401; token presente pero inválido
/// o expirado -> 403.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Acceso denegado".to_string()))?;

        let token = extract_token_from_header(auth_header)?;

        let jwt_config = JwtConfig::from(&state.config);
        let claims = verify_token(token, &jwt_config)?;

        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("Token inválido o expirado".to_string()))?;
        let role = UserRole::from_str(&claims.role)
            .ok_or_else(|| AppError::Jwt("Token inválido o expirado".to_string()))?;

        Ok(AuthUser {
            id,
            email: claims.email,
            role,
        })
    }
}

/// Usuario autenticado con rol admin; rechaza al resto con 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AppError::Forbidden(
                "No estás autorizado a realizar esta operación".to_string(),
            ));
        }

        Ok(AdminUser(user))
    }
}
