//! Datos por defecto
//!
//! Cuenta admin inicial y flota de vehículos de ejemplo, insertados en el
//! arranque. Cada inserción usa `ON CONFLICT DO NOTHING` sobre su clave
//! única, de modo que dos procesos arrancando a la vez no duplican filas
//! ni fallan.

use anyhow::Result;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;

/// Crear la cuenta admin por defecto si no existe
pub async fn seed_default_admin(pool: &PgPool, config: &EnvironmentConfig) -> Result<()> {
    let password_hash = hash(&config.default_admin_password, DEFAULT_COST)?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password, role, status, created_at, updated_at)
        VALUES ($1, 'Administrateur', $2, $3, 'admin', 'active', now(), now())
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&config.default_admin_email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        log::info!("Cuenta admin por defecto creada: {}", config.default_admin_email);
    }

    Ok(())
}

/// Flota de ejemplo insertada solo cuando el inventario está vacío
const DEFAULT_VEHICULES: &[(&str, &str, &str, &str, i32, &str)] = &[
    ("Toyota", "Corolla", "TG-1234-AB", "Blanc", 5, "gasoline"),
    ("Nissan", "Leaf", "TG-7890-IJ", "Bleu", 5, "electric"),
    ("Renault", "Kwid", "TG-9012-EF", "Rouge", 4, "diesel"),
    ("Peugeot", "208", "TG-3456-GH", "Gris", 4, "gasoline"),
];

/// Insertar los vehículos por defecto si el inventario está vacío
pub async fn seed_default_vehicules(pool: &PgPool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicules")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        log::info!("Inventario no vacío, vehículos por defecto omitidos");
        return Ok(());
    }

    let mut inserted = 0u64;
    for (brand, model, plate_number, color, seats, fuel_type) in DEFAULT_VEHICULES {
        let result = sqlx::query(
            r#"
            INSERT INTO vehicules (id, brand, model, plate_number, color, seats, fuel_type, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'operational', now(), now())
            ON CONFLICT (plate_number) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand)
        .bind(model)
        .bind(plate_number)
        .bind(color)
        .bind(seats)
        .bind(fuel_type)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    log::info!("{} vehículos por defecto creados", inserted);
    Ok(())
}
