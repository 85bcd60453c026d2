//! Motor de reservas
//!
//! Valida y admite solicitudes de reserva contra las reservas existentes
//! y conduce la máquina de estados pending/confirmed/cancelled.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::MessageResponse;
use crate::dto::reservation_dto::{
    CreateReservationRequest, ReservationResponse, ReservationWithDetails,
    ReservationWithVehicule,
};
use crate::middleware::auth::AuthUser;
use crate::models::reservation::NewReservation;
use crate::repositories::reservation_repository::{
    ApprovalOutcome, ReservationRepository, ReservationStore,
};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_datetime;

pub struct ReservationController<S: ReservationStore = ReservationRepository> {
    store: S,
}

impl ReservationController<ReservationRepository> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: ReservationRepository::new(pool),
        }
    }
}

impl<S: ReservationStore> ReservationController<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Secuencia de admisión de una reserva nueva. Corta en el primer
    /// fallo; en caso de éxito la reserva queda `pending` a la espera de
    /// aprobación y todavía no bloquea el vehículo.
    pub async fn create(
        &self,
        caller: &AuthUser,
        request: CreateReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        let user = self
            .store
            .find_user(caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if !user.is_active() {
            return Err(AppError::Forbidden(
                "Tu cuenta está inactiva. No puedes realizar reservas".to_string(),
            ));
        }

        let (Some(vehicule_id), Some(start_date), Some(end_date), Some(motif)) = (
            request.vehicule_id,
            request.start_date,
            request.end_date,
            request.motif.filter(|m| !m.trim().is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Vehículo, fecha de inicio, fecha de fin y motivo son requeridos".to_string(),
            ));
        };

        let (Ok(start_date), Ok(end_date)) =
            (validate_datetime(&start_date), validate_datetime(&end_date))
        else {
            return Err(AppError::BadRequest(
                "Fechas inválidas. Usa el formato ISO (ej: 2026-01-20T10:00:00)".to_string(),
            ));
        };

        if end_date <= start_date {
            return Err(AppError::BadRequest(
                "La fecha de fin debe ser posterior a la fecha de inicio".to_string(),
            ));
        }

        if self
            .store
            .user_has_confirmed_overlap(caller.id, start_date, end_date)
            .await?
        {
            return Err(AppError::Conflict(
                "Ya tienes una reserva en curso que se solapa con estas fechas".to_string(),
            ));
        }

        if !self.store.vehicule_exists(vehicule_id).await? {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        if self
            .store
            .vehicule_has_confirmed_overlap(vehicule_id, start_date, end_date)
            .await?
        {
            return Err(AppError::Conflict(
                "Este vehículo ya está reservado en ese período".to_string(),
            ));
        }

        let reservation = self
            .store
            .insert_pending(NewReservation {
                user_id: caller.id,
                vehicule_id,
                start_date,
                end_date,
                motif,
            })
            .await?;

        Ok(ReservationResponse::from(reservation))
    }

    /// Historial de reservas del usuario conectado, más recientes primero
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ReservationWithVehicule>, AppError> {
        self.store.list_for_user(user_id).await
    }

    /// confirmed -> cancelled. Un segundo intento sobre la misma reserva
    /// devuelve 404, no éxito.
    pub async fn cancel(&self, actor: &AuthUser, id: Uuid) -> Result<MessageResponse, AppError> {
        let cancelled = self.store.cancel(id, actor.id, actor.is_admin()).await?;
        if !cancelled {
            return Err(AppError::NotFound(
                "Reserva no encontrada o ya anulada".to_string(),
            ));
        }

        Ok(MessageResponse::new("Reserva anulada exitosamente"))
    }

    /// pending -> confirmed (solo admin), revalidando solapamientos en el
    /// momento de la aprobación.
    pub async fn approve(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        match self.store.approve(id).await? {
            ApprovalOutcome::Approved => {
                Ok(MessageResponse::new("Reserva aprobada exitosamente"))
            }
            ApprovalOutcome::NotPending => Err(AppError::NotFound(
                "Reserva no encontrada o ya aprobada".to_string(),
            )),
            ApprovalOutcome::VehiculeConflict => Err(AppError::Conflict(
                "Este vehículo ya está reservado en ese período".to_string(),
            )),
            ApprovalOutcome::UserConflict => Err(AppError::Conflict(
                "El usuario ya tiene una reserva confirmada que se solapa con estas fechas"
                    .to_string(),
            )),
        }
    }

    /// pending -> cancelled (solo admin)
    pub async fn disapprove(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        let disapproved = self.store.disapprove(id).await?;
        if !disapproved {
            return Err(AppError::NotFound(
                "Reserva no encontrada o ya desaprobada".to_string(),
            ));
        }

        Ok(MessageResponse::new("Reserva desaprobada exitosamente"))
    }

    /// Todas las reservas con detalle de usuario y vehículo (solo admin)
    pub async fn list_all(&self) -> Result<Vec<ReservationWithDetails>, AppError> {
        self.store.list_all_with_details().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use std::sync::Mutex;

    use crate::models::reservation::{intervals_overlap, Reservation, ReservationStatus};
    use crate::models::user::{User, UserRole};

    /// Doble en memoria del almacén de reservas
    struct InMemoryStore {
        users: Vec<User>,
        vehicules: Vec<Uuid>,
        reservations: Mutex<Vec<Reservation>>,
    }

    impl InMemoryStore {
        fn new(users: Vec<User>, vehicules: Vec<Uuid>) -> Self {
            Self {
                users,
                vehicules,
                reservations: Mutex::new(Vec::new()),
            }
        }

        fn push_reservation(
            &self,
            user_id: Uuid,
            vehicule_id: Uuid,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
            status: ReservationStatus,
        ) -> Uuid {
            let id = Uuid::new_v4();
            self.reservations.lock().unwrap().push(Reservation {
                id,
                user_id,
                vehicule_id,
                start_date: start,
                end_date: end,
                status: status.as_str().to_string(),
                motif: "mission".to_string(),
                created_at: Utc::now(),
            });
            id
        }

        fn status_of(&self, id: Uuid) -> Option<ReservationStatus> {
            self.reservations
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .and_then(|r| ReservationStatus::from_str(&r.status))
        }
    }

    #[async_trait]
    impl ReservationStore for InMemoryStore {
        async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn vehicule_exists(&self, id: Uuid) -> Result<bool, AppError> {
            Ok(self.vehicules.contains(&id))
        }

        async fn user_has_confirmed_overlap(
            &self,
            user_id: Uuid,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<bool, AppError> {
            Ok(self.reservations.lock().unwrap().iter().any(|r| {
                r.user_id == user_id
                    && r.status == ReservationStatus::Confirmed.as_str()
                    && intervals_overlap(start, end, r.start_date, r.end_date)
            }))
        }

        async fn vehicule_has_confirmed_overlap(
            &self,
            vehicule_id: Uuid,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<bool, AppError> {
            Ok(self.reservations.lock().unwrap().iter().any(|r| {
                r.vehicule_id == vehicule_id
                    && r.status == ReservationStatus::Confirmed.as_str()
                    && intervals_overlap(start, end, r.start_date, r.end_date)
            }))
        }

        async fn insert_pending(&self, new: NewReservation) -> Result<Reservation, AppError> {
            let reservation = Reservation {
                id: Uuid::new_v4(),
                user_id: new.user_id,
                vehicule_id: new.vehicule_id,
                start_date: new.start_date,
                end_date: new.end_date,
                status: ReservationStatus::Pending.as_str().to_string(),
                motif: new.motif,
                created_at: Utc::now(),
            };
            self.reservations.lock().unwrap().push(reservation.clone());
            Ok(reservation)
        }

        async fn cancel(
            &self,
            id: Uuid,
            actor_id: Uuid,
            is_admin: bool,
        ) -> Result<bool, AppError> {
            let mut reservations = self.reservations.lock().unwrap();
            let target = reservations.iter_mut().find(|r| {
                r.id == id
                    && r.status == ReservationStatus::Confirmed.as_str()
                    && (is_admin || r.user_id == actor_id)
            });
            match target {
                Some(r) => {
                    r.status = ReservationStatus::Cancelled.as_str().to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn approve(&self, id: Uuid) -> Result<ApprovalOutcome, AppError> {
            let mut reservations = self.reservations.lock().unwrap();

            let Some(index) = reservations.iter().position(|r| r.id == id) else {
                return Ok(ApprovalOutcome::NotPending);
            };
            if reservations[index].status != ReservationStatus::Pending.as_str() {
                return Ok(ApprovalOutcome::NotPending);
            }

            let (vehicule_id, user_id, start, end) = {
                let r = &reservations[index];
                (r.vehicule_id, r.user_id, r.start_date, r.end_date)
            };

            let vehicule_conflict = reservations.iter().any(|r| {
                r.id != id
                    && r.vehicule_id == vehicule_id
                    && r.status == ReservationStatus::Confirmed.as_str()
                    && intervals_overlap(start, end, r.start_date, r.end_date)
            });
            if vehicule_conflict {
                return Ok(ApprovalOutcome::VehiculeConflict);
            }

            let user_conflict = reservations.iter().any(|r| {
                r.id != id
                    && r.user_id == user_id
                    && r.status == ReservationStatus::Confirmed.as_str()
                    && intervals_overlap(start, end, r.start_date, r.end_date)
            });
            if user_conflict {
                return Ok(ApprovalOutcome::UserConflict);
            }

            reservations[index].status = ReservationStatus::Confirmed.as_str().to_string();
            Ok(ApprovalOutcome::Approved)
        }

        async fn disapprove(&self, id: Uuid) -> Result<bool, AppError> {
            let mut reservations = self.reservations.lock().unwrap();
            let target = reservations
                .iter_mut()
                .find(|r| r.id == id && r.status == ReservationStatus::Pending.as_str());
            match target {
                Some(r) => {
                    r.status = ReservationStatus::Cancelled.as_str().to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn list_for_user(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<ReservationWithVehicule>, AppError> {
            let mut rows: Vec<ReservationWithVehicule> = self
                .reservations
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .map(|r| ReservationWithVehicule {
                    id: r.id,
                    user_id: r.user_id,
                    vehicule_id: r.vehicule_id,
                    start_date: r.start_date,
                    end_date: r.end_date,
                    status: r.status.clone(),
                    motif: r.motif.clone(),
                    created_at: r.created_at,
                    brand: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    plate_number: "TG-1234-AB".to_string(),
                })
                .collect();
            rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
            Ok(rows)
        }

        async fn list_all_with_details(&self) -> Result<Vec<ReservationWithDetails>, AppError> {
            Ok(Vec::new())
        }
    }

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn make_user(role: UserRole, active: bool) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: format!("{}@example.com", Uuid::new_v4()),
            password: "$2b$10$hash".to_string(),
            role: role.as_str().to_string(),
            status: if active { "active" } else { "inactive" }.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn auth(user: &User) -> AuthUser {
        AuthUser {
            id: user.id,
            email: user.email.clone(),
            role: UserRole::from_str(&user.role).unwrap(),
        }
    }

    fn request(vehicule_id: Uuid, start: &str, end: &str) -> CreateReservationRequest {
        CreateReservationRequest {
            vehicule_id: Some(vehicule_id),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            motif: Some("mission de terrain".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_pending_reservation() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        let created = controller
            .create(&auth(&user), request(vehicule, "2026-02-01T10:00:00", "2026-02-05T10:00:00"))
            .await
            .unwrap();

        assert_eq!(created.status, "pending");
        assert_eq!(created.user_id, user.id);
        assert_eq!(created.vehicule_id, vehicule);
    }

    #[tokio::test]
    async fn test_inactive_user_is_rejected() {
        let user = make_user(UserRole::User, false);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        // Intervalo perfectamente válido y libre: el estado de la cuenta
        // basta para rechazar.
        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-01T10:00:00", "2026-02-05T10:00:00"))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        let result = controller
            .create(
                &auth(&user),
                CreateReservationRequest {
                    vehicule_id: Some(vehicule),
                    start_date: Some("2026-02-01".to_string()),
                    end_date: Some("2026-02-05".to_string()),
                    motif: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_blank_motif_is_missing() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        let result = controller
            .create(
                &auth(&user),
                CreateReservationRequest {
                    vehicule_id: Some(vehicule),
                    start_date: Some("2026-02-01".to_string()),
                    end_date: Some("2026-02-05".to_string()),
                    motif: Some("   ".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_invalid_dates() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        let result = controller
            .create(&auth(&user), request(vehicule, "pas-une-date", "2026-02-05T10:00:00"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_end_not_after_start() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let controller = ReservationController::with_store(store);

        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-05T10:00:00", "2026-02-05T10:00:00"))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-05T10:00:00", "2026-02-01T10:00:00"))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_unknown_vehicule() {
        let user = make_user(UserRole::User, true);
        let store = InMemoryStore::new(vec![user.clone()], vec![]);
        let controller = ReservationController::with_store(store);

        let result = controller
            .create(
                &auth(&user),
                request(Uuid::new_v4(), "2026-02-01T10:00:00", "2026-02-05T10:00:00"),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_vehicule_overlap_conflict() {
        let user = make_user(UserRole::User, true);
        let other = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone(), other.clone()], vec![vehicule]);

        // Reserva confirmada existente [2026-02-01, 2026-02-05)
        store.push_reservation(
            other.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        // [2026-02-04, 2026-02-06) solapa -> conflicto
        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-04T00:00:00", "2026-02-06T00:00:00"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_adjacent_reservation_is_admitted() {
        let user = make_user(UserRole::User, true);
        let other = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone(), other.clone()], vec![vehicule]);

        store.push_reservation(
            other.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        // Empieza exactamente cuando termina la existente -> admitida
        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-05T00:00:00", "2026-02-06T00:00:00"))
            .await;
        assert!(result.is_ok());

        // Termina exactamente cuando empieza la existente -> admitida
        let result = controller
            .create(&auth(&user), request(vehicule, "2026-01-01T00:00:00", "2026-02-01T00:00:00"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_pending_reservations_do_not_block() {
        let user = make_user(UserRole::User, true);
        let other = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone(), other.clone()], vec![vehicule]);

        store.push_reservation(
            other.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Pending,
        );
        store.push_reservation(
            other.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Cancelled,
        );

        let controller = ReservationController::with_store(store);

        let result = controller
            .create(&auth(&user), request(vehicule, "2026-02-02T00:00:00", "2026-02-04T00:00:00"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_user_double_booking_conflict() {
        let user = make_user(UserRole::User, true);
        let vehicule_a = Uuid::new_v4();
        let vehicule_b = Uuid::new_v4();
        let store =
            InMemoryStore::new(vec![user.clone()], vec![vehicule_a, vehicule_b]);

        // El usuario ya tiene una reserva confirmada sobre OTRO vehículo
        store.push_reservation(
            user.id,
            vehicule_a,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        let result = controller
            .create(&auth(&user), request(vehicule_b, "2026-02-03T00:00:00", "2026-02-07T00:00:00"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_cancel_own_confirmed_reservation() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let id = store.push_reservation(
            user.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        assert!(controller.cancel(&auth(&user), id).await.is_ok());
        assert_eq!(
            controller.store.status_of(id),
            Some(ReservationStatus::Cancelled)
        );

        // Segunda anulación: 404, no éxito
        let result = controller.cancel(&auth(&user), id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_user_cannot_cancel_foreign_reservation() {
        let owner = make_user(UserRole::User, true);
        let intruder = make_user(UserRole::User, true);
        let admin = make_user(UserRole::Admin, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(
            vec![owner.clone(), intruder.clone(), admin.clone()],
            vec![vehicule],
        );
        let id = store.push_reservation(
            owner.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        // Una reserva ajena se comporta como inexistente
        let result = controller.cancel(&auth(&intruder), id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // El admin sí puede anular cualquier reserva confirmada
        assert!(controller.cancel(&auth(&admin), id).await.is_ok());
    }

    #[tokio::test]
    async fn test_pending_reservation_is_not_cancellable() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let id = store.push_reservation(
            user.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Pending,
        );

        let controller = ReservationController::with_store(store);

        let result = controller.cancel(&auth(&user), id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_approve_pending_reservation() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let id = store.push_reservation(
            user.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Pending,
        );

        let controller = ReservationController::with_store(store);

        assert!(controller.approve(id).await.is_ok());
        assert_eq!(
            controller.store.status_of(id),
            Some(ReservationStatus::Confirmed)
        );

        // Ya no está pendiente: segunda aprobación -> 404
        let result = controller.approve(id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_approve_revalidates_overlaps() {
        let user = make_user(UserRole::User, true);
        let other = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone(), other.clone()], vec![vehicule]);

        // Pendiente enviada primero...
        let pending = store.push_reservation(
            user.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Pending,
        );
        // ...pero otra reserva del mismo vehículo se confirmó entre tanto
        store.push_reservation(
            other.id,
            vehicule,
            ts("2026-02-03T00:00:00"),
            ts("2026-02-07T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        let result = controller.approve(pending).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(
            controller.store.status_of(pending),
            Some(ReservationStatus::Pending)
        );
    }

    #[tokio::test]
    async fn test_disapprove_pending_reservation() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        let id = store.push_reservation(
            user.id,
            vehicule,
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
            ReservationStatus::Pending,
        );

        let controller = ReservationController::with_store(store);

        assert!(controller.disapprove(id).await.is_ok());
        assert_eq!(
            controller.store.status_of(id),
            Some(ReservationStatus::Cancelled)
        );

        // cancelled es terminal: ni aprobar ni volver a desaprobar
        assert!(matches!(controller.approve(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(controller.disapprove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_for_user_most_recent_first() {
        let user = make_user(UserRole::User, true);
        let vehicule = Uuid::new_v4();
        let store = InMemoryStore::new(vec![user.clone()], vec![vehicule]);
        store.push_reservation(
            user.id,
            vehicule,
            ts("2026-01-01T00:00:00"),
            ts("2026-01-02T00:00:00"),
            ReservationStatus::Cancelled,
        );
        store.push_reservation(
            user.id,
            vehicule,
            ts("2026-03-01T00:00:00"),
            ts("2026-03-02T00:00:00"),
            ReservationStatus::Confirmed,
        );

        let controller = ReservationController::with_store(store);

        let rows = controller.list_for_user(user.id).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].start_date > rows[1].start_date);
    }
}
