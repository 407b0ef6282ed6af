use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::Error;

/// Account status. Stored and serialized as the literal Spanish label,
/// never an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EstadoUsuario {
    Activo,
    Inactivo,
    Eliminado,
}

/// Usuario record as persisted in the `usuarios` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UsuarioRow {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub estado: EstadoUsuario,
    pub premium: bool,
}

impl UsuarioRow {
    /// Insert a new usuario and return the persisted row with its
    /// generated id. Estado is always Activo at creation.
    pub async fn create(
        db: &SqlitePool,
        nombre: &str,
        email: &str,
        premium: bool,
    ) -> Result<UsuarioRow, Error> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            INSERT INTO usuarios (nombre, email, estado, premium)
            VALUES (?, ?, ?, ?)
            RETURNING id, nombre, email, estado, premium
            "#,
        )
        .bind(nombre)
        .bind(email)
        .bind(EstadoUsuario::Activo)
        .bind(premium)
        .fetch_one(db)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                Error::ConstraintViolation(format!("email {email} is already registered"))
            }
            _ => Error::Persistence(e),
        })?;
        Ok(row)
    }

    /// Find a usuario by id.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<UsuarioRow>, Error> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id, nombre, email, estado, premium
            FROM usuarios
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
