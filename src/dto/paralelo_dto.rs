use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::paralelo::Paralelo;

// Request para crear un paralelo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParaleloRequest {
    #[validate(length(max = 100, message = "El nombre no puede superar los 100 caracteres"))]
    pub nombre: Option<String>,
}

// Request para actualizar un paralelo (sobrescritura completa del nombre)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateParaleloRequest {
    #[validate(length(max = 100, message = "El nombre no puede superar los 100 caracteres"))]
    pub nombre: Option<String>,
}

// Response de paralelo
#[derive(Debug, Serialize)]
pub struct ParaleloResponse {
    pub id: i32,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Paralelo> for ParaleloResponse {
    fn from(paralelo: Paralelo) -> Self {
        Self {
            id: paralelo.id,
            nombre: paralelo.nombre,
            created_at: paralelo.created_at,
            updated_at: paralelo.updated_at,
        }
    }
}

// Response de operación sobre un paralelo, con mensaje de confirmación
#[derive(Debug, Serialize)]
pub struct ParaleloMensajeResponse {
    pub mensaje: String,
    pub paralelo: ParaleloResponse,
}

// Response de mensaje simple, compartida por todos los recursos
#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub mensaje: String,
}
