use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{error::Error, state::AppState};

use super::dto::{Tarea, TareaCreate};
use super::repo::TareaRow;

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/tareas", post(crear_tarea))
}

#[instrument(skip(state, payload))]
pub async fn crear_tarea(
    State(state): State<AppState>,
    Json(payload): Json<TareaCreate>,
) -> Result<(StatusCode, Json<Tarea>), Error> {
    if payload.nombre.trim().is_empty() {
        warn!("empty nombre");
        return Err(Error::Validation("nombre must be non-empty".into()));
    }

    let row = TareaRow::create(
        &state.db,
        payload.nombre.trim(),
        payload.descripcion.as_deref(),
        payload.usuario_id,
    )
    .await?;

    info!(tarea_id = row.id, usuario_id = row.usuario_id, "tarea created");
    Ok((StatusCode::CREATED, Json(row.into())))
}
