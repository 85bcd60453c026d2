use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::auth_dto::MessageResponse;
use crate::dto::reservation_dto::{
    CreateReservationRequest, ReservationResponse, ReservationWithDetails,
    ReservationWithVehicule,
};
use crate::middleware::auth::{AdminUser, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_reservation))
        .route("/user", get(list_user_reservations))
        .route("/cancel/:id", put(cancel_reservation))
        // Workflow de aprobación, reservado al admin
        .route("/approve/:id", put(approve_reservation))
        .route("/disapprove/:id", put(disapprove_reservation))
        .route("/all", get(list_all_reservations))
}

async fn create_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_user_reservations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ReservationWithVehicule>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list_for_user(user.id).await?;
    Ok(Json(response))
}

async fn cancel_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.cancel(&user, id).await?;
    Ok(Json(response))
}

async fn approve_reservation(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}

async fn disapprove_reservation(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.disapprove(id).await?;
    Ok(Json(response))
}

async fn list_all_reservations(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<ReservationWithDetails>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}
