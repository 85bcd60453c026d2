use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::reservation_dto::{ReservationWithDetails, ReservationWithVehicule};
use crate::models::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::models::user::User;
use crate::utils::errors::{is_constraint_conflict, AppError};

/// Resultado de un intento de aprobación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    Approved,
    /// La reserva no existe o ya no está pendiente
    NotPending,
    /// Otra reserva confirmada del mismo vehículo se solapa
    VehiculeConflict,
    /// Otra reserva confirmada del mismo usuario se solapa
    UserConflict,
}

/// Vista del almacén que necesita el motor de reservas.
///
/// El controller depende de este trait y no del pool, de modo que los
/// tests lo reemplazan por un doble en memoria.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn vehicule_exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// ¿El usuario ya tiene una reserva confirmada que solapa [start, end)?
    async fn user_has_confirmed_overlap(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    /// ¿El vehículo ya tiene una reserva confirmada que solapa [start, end)?
    async fn vehicule_has_confirmed_overlap(
        &self,
        vehicule_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    async fn insert_pending(&self, new: NewReservation) -> Result<Reservation, AppError>;

    /// confirmed -> cancelled. Un admin puede anular cualquier reserva,
    /// un usuario solo las suyas. Devuelve false si no hay fila anulable.
    async fn cancel(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> Result<bool, AppError>;

    /// pending -> confirmed, revalidando solapamientos.
    async fn approve(&self, id: Uuid) -> Result<ApprovalOutcome, AppError>;

    /// pending -> cancelled. Devuelve false si no hay fila pendiente.
    async fn disapprove(&self, id: Uuid) -> Result<bool, AppError>;

    async fn list_for_user(&self, user_id: Uuid)
        -> Result<Vec<ReservationWithVehicule>, AppError>;

    async fn list_all_with_details(&self) -> Result<Vec<ReservationWithDetails>, AppError>;
}

/// Implementación Postgres del almacén de reservas
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn vehicule_exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicules WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn user_has_confirmed_overlap(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        // Test de intervalos semiabiertos: existente.start < nueva.end
        // AND existente.end > nueva.start
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE user_id = $1
                  AND status = 'confirmed'
                  AND start_date < $3
                  AND end_date > $2
            )
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn vehicule_has_confirmed_overlap(
        &self,
        vehicule_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE vehicule_id = $1
                  AND status = 'confirmed'
                  AND start_date < $3
                  AND end_date > $2
            )
            "#,
        )
        .bind(vehicule_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn insert_pending(&self, new: NewReservation) -> Result<Reservation, AppError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (id, user_id, vehicule_id, start_date, end_date, status, motif, created_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.vehicule_id)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.motif)
        .fetch_one(&self.pool)
        .await?;

        Ok(reservation)
    }

    async fn cancel(&self, id: Uuid, actor_id: Uuid, is_admin: bool) -> Result<bool, AppError> {
        // La autorización va en el WHERE: una reserva ajena se comporta
        // igual que una inexistente (404, no 403).
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET status = 'cancelled'
            WHERE id = $1
              AND status = 'confirmed'
              AND ($3 OR user_id = $2)
            "#,
        )
        .bind(id)
        .bind(actor_id)
        .bind(is_admin)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn approve(&self, id: Uuid) -> Result<ApprovalOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        // Bloquear la fila para que dos aprobaciones concurrentes de la
        // misma reserva se serialicen.
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(reservation) = reservation else {
            return Ok(ApprovalOutcome::NotPending);
        };

        if reservation.status != ReservationStatus::Pending.as_str() {
            return Ok(ApprovalOutcome::NotPending);
        }

        // Revalidar solapamientos contra lo confirmado entre el envío
        // de la solicitud y su aprobación.
        let (vehicule_conflict,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE vehicule_id = $1
                  AND status = 'confirmed'
                  AND start_date < $3
                  AND end_date > $2
            )
            "#,
        )
        .bind(reservation.vehicule_id)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .fetch_one(&mut *tx)
        .await?;

        if vehicule_conflict {
            return Ok(ApprovalOutcome::VehiculeConflict);
        }

        let (user_conflict,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE user_id = $1
                  AND status = 'confirmed'
                  AND start_date < $3
                  AND end_date > $2
            )
            "#,
        )
        .bind(reservation.user_id)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .fetch_one(&mut *tx)
        .await?;

        if user_conflict {
            return Ok(ApprovalOutcome::UserConflict);
        }

        // Las restricciones de exclusión del schema cubren la ventana entre
        // aprobaciones concurrentes de reservas distintas.
        let update = sqlx::query("UPDATE reservations SET status = 'confirmed' WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match update {
            Ok(_) => {}
            Err(e) if is_constraint_conflict(&e) => {
                return Ok(ApprovalOutcome::VehiculeConflict);
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;
        Ok(ApprovalOutcome::Approved)
    }

    async fn disapprove(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE reservations SET status = 'cancelled' WHERE id = $1 AND status = 'pending'",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ReservationWithVehicule>, AppError> {
        let reservations = sqlx::query_as::<_, ReservationWithVehicule>(
            r#"
            SELECT r.id, r.user_id, r.vehicule_id, r.start_date, r.end_date,
                   r.status, r.motif, r.created_at,
                   v.brand, v.model, v.plate_number
            FROM reservations r
            JOIN vehicules v ON r.vehicule_id = v.id
            WHERE r.user_id = $1
            ORDER BY r.start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    async fn list_all_with_details(&self) -> Result<Vec<ReservationWithDetails>, AppError> {
        let reservations = sqlx::query_as::<_, ReservationWithDetails>(
            r#"
            SELECT r.id, r.start_date, r.end_date, r.status, r.motif,
                   u.name AS user_name, u.email,
                   v.brand, v.model, v.plate_number
            FROM reservations r
            JOIN users u ON r.user_id = u.id
            JOIN vehicules v ON r.vehicule_id = v.id
            ORDER BY r.start_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }
}
