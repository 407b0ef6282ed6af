use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::{EstadoTarea, TareaRow};

/// Request body for creating a tarea. Estado and timestamps are always
/// server-assigned.
#[derive(Debug, Deserialize)]
pub struct TareaCreate {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub usuario_id: i64,
}

/// Full tarea representation returned to the client.
#[derive(Debug, Serialize)]
pub struct Tarea {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_modificacion: OffsetDateTime,
    pub estado: EstadoTarea,
    pub usuario_id: i64,
}

impl From<TareaRow> for Tarea {
    fn from(r: TareaRow) -> Self {
        Self {
            id: r.id,
            nombre: r.nombre,
            descripcion: r.descripcion,
            fecha_creacion: r.fecha_creacion,
            fecha_modificacion: r.fecha_modificacion,
            estado: r.estado,
            usuario_id: r.usuario_id,
        }
    }
}
