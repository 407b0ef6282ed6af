use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use crate::error::Error;

/// Task status. Stored and serialized as the literal Spanish label,
/// never an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EstadoTarea {
    Pendiente,
    #[serde(rename = "En ejecución")]
    #[sqlx(rename = "En ejecución")]
    EnEjecucion,
    Realizada,
    Cancelada,
}

/// Tarea record as persisted in the `tareas` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TareaRow {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha_creacion: OffsetDateTime,
    pub fecha_modificacion: OffsetDateTime,
    pub estado: EstadoTarea,
    pub usuario_id: i64,
}

impl TareaRow {
    /// Insert a new tarea and return the persisted row with its
    /// generated id and timestamps. The referenced usuario is checked
    /// inside the same transaction as the insert, so a failed check or
    /// a failed insert leaves no row behind.
    pub async fn create(
        db: &SqlitePool,
        nombre: &str,
        descripcion: Option<&str>,
        usuario_id: i64,
    ) -> Result<TareaRow, Error> {
        let mut tx = db.begin().await?;

        let usuario = sqlx::query_scalar::<_, i64>("SELECT id FROM usuarios WHERE id = ?")
            .bind(usuario_id)
            .fetch_optional(&mut *tx)
            .await?;
        if usuario.is_none() {
            // dropping tx rolls back
            return Err(Error::ReferenceNotFound {
                entity: "usuario",
                id: usuario_id,
            });
        }

        let now = OffsetDateTime::now_utc();
        let row = sqlx::query_as::<_, TareaRow>(
            r#"
            INSERT INTO tareas (nombre, descripcion, fecha_creacion, fecha_modificacion, estado, usuario_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, nombre, descripcion, fecha_creacion, fecha_modificacion, estado, usuario_id
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(now)
        .bind(now)
        .bind(EstadoTarea::Pendiente)
        .bind(usuario_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => Error::ReferenceNotFound {
                entity: "usuario",
                id: usuario_id,
            },
            _ => Error::Persistence(e),
        })?;

        tx.commit().await?;
        Ok(row)
    }

    /// Find a tarea by id.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<TareaRow>, Error> {
        let row = sqlx::query_as::<_, TareaRow>(
            r#"
            SELECT id, nombre, descripcion, fecha_creacion, fecha_modificacion, estado, usuario_id
            FROM tareas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
