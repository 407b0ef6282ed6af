use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{error::Error, state::AppState};

use super::dto::{Usuario, UsuarioCreate};
use super::repo::UsuarioRow;

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/usuarios", post(crear_usuario))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn crear_usuario(
    State(state): State<AppState>,
    Json(mut payload): Json<UsuarioCreate>,
) -> Result<(StatusCode, Json<Usuario>), Error> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.nombre.trim().is_empty() {
        warn!("empty nombre");
        return Err(Error::Validation("nombre must be non-empty".into()));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(Error::Validation("invalid email".into()));
    }

    let row = UsuarioRow::create(
        &state.db,
        payload.nombre.trim(),
        &payload.email,
        payload.premium,
    )
    .await?;

    info!(usuario_id = row.id, email = %row.email, "usuario created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("ejemplo@test.com"));
        assert!(!is_valid_email("ejemplo"));
        assert!(!is_valid_email("ejemplo@test"));
        assert!(!is_valid_email("ej emplo@test.com"));
    }
}
