use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicule_controller::VehiculeController;
use crate::dto::auth_dto::MessageResponse;
use crate::dto::vehicule_dto::{
    CreateVehiculeRequest, UpdateVehiculeRequest, UpdateVehiculeStatusRequest, VehiculeResponse,
};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicule_router() -> Router<AppState> {
    Router::new()
        // Consulta pública del inventario
        .route("/", get(list_vehicules))
        .route("/:id", get(get_vehicule))
        // Gestión reservada al admin
        .route("/create", post(create_vehicule))
        .route("/update/:id", put(update_vehicule))
        .route("/status/:id", put(update_vehicule_status))
        .route("/delete/:id", delete(delete_vehicule))
}

async fn list_vehicules(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiculeResponse>>, AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehiculeResponse>, AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_vehicule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(request): Json<CreateVehiculeRequest>,
) -> Result<(StatusCode, Json<VehiculeResponse>), AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculeRequest>,
) -> Result<Json<VehiculeResponse>, AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.update_info(id, request).await?;
    Ok(Json(response))
}

async fn update_vehicule_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculeStatusRequest>,
) -> Result<Json<VehiculeResponse>, AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = VehiculeController::new(state.pool.clone());
    let response = controller.remove(id).await?;
    Ok(Json(response))
}
