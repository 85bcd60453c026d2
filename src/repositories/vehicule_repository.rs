use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicule::Vehicule;
use crate::utils::errors::{is_constraint_conflict, AppError};

pub struct VehiculeRepository {
    pool: PgPool,
}

impl VehiculeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        brand: String,
        model: String,
        plate_number: String,
        color: String,
        seats: i32,
        fuel_type: String,
    ) -> Result<Vehicule, AppError> {
        let vehicule = sqlx::query_as::<_, Vehicule>(
            r#"
            INSERT INTO vehicules (id, brand, model, plate_number, color, seats, fuel_type, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'operational', now(), now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand)
        .bind(model)
        .bind(plate_number)
        .bind(color)
        .bind(seats)
        .bind(fuel_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_constraint_conflict(&e) {
                AppError::Conflict("Ya existe un vehículo con esta matrícula".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(vehicule)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicule>, AppError> {
        let vehicule = sqlx::query_as::<_, Vehicule>("SELECT * FROM vehicules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicule)
    }

    pub async fn plate_number_exists(&self, plate_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicules WHERE plate_number = $1)")
                .bind(plate_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicule>, AppError> {
        let vehicules =
            sqlx::query_as::<_, Vehicule>("SELECT * FROM vehicules ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicules)
    }

    /// Cambiar el estado operacional (operational | maintenance)
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Vehicule>, AppError> {
        let vehicule = sqlx::query_as::<_, Vehicule>(
            "UPDATE vehicules SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicule)
    }

    /// Reemplazo completo de los datos del vehículo
    pub async fn update_info(
        &self,
        id: Uuid,
        brand: String,
        model: String,
        plate_number: String,
        color: String,
        seats: i32,
        fuel_type: String,
        status: String,
    ) -> Result<Option<Vehicule>, AppError> {
        let vehicule = sqlx::query_as::<_, Vehicule>(
            r#"
            UPDATE vehicules
            SET brand = $2, model = $3, plate_number = $4, color = $5,
                seats = $6, fuel_type = $7, status = $8, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand)
        .bind(model)
        .bind(plate_number)
        .bind(color)
        .bind(seats)
        .bind(fuel_type)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_constraint_conflict(&e) {
                AppError::Conflict("Ya existe un vehículo con esta matrícula".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(vehicule)
    }

    /// Eliminar un vehículo; las reservas dependientes caen en cascada (FK).
    /// Devuelve false si el vehículo no existe.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
