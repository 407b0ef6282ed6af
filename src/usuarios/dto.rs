use serde::{Deserialize, Serialize};

use super::repo::{EstadoUsuario, UsuarioRow};

/// Request body for creating a usuario. Estado is never accepted from
/// the caller.
#[derive(Debug, Deserialize)]
pub struct UsuarioCreate {
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub premium: bool,
}

/// Full usuario representation returned to the client.
#[derive(Debug, Serialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub estado: EstadoUsuario,
    pub premium: bool,
}

impl From<UsuarioRow> for Usuario {
    fn from(r: UsuarioRow) -> Self {
        Self {
            id: r.id,
            nombre: r.nombre,
            email: r.email,
            estado: r.estado,
            premium: r.premium,
        }
    }
}
