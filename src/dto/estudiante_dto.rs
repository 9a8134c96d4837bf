use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::paralelo_dto::ParaleloResponse;
use crate::models::estudiante::{Estudiante, EstudianteConParalelo};

// Request para crear un estudiante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEstudianteRequest {
    #[validate(length(max = 255, message = "El nombre no puede superar los 255 caracteres"))]
    pub nombre: Option<String>,
    pub cedula: Option<String>,
    #[validate(email(message = "El correo debe ser una dirección de email válida"))]
    pub correo: Option<String>,
    pub paralelo_id: Option<i32>,
}

// Request para actualizar un estudiante; cada campo es opcional y solo
// los presentes se aplican
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEstudianteRequest {
    #[validate(length(max = 255, message = "El nombre no puede superar los 255 caracteres"))]
    pub nombre: Option<String>,
    pub cedula: Option<String>,
    #[validate(email(message = "El correo debe ser una dirección de email válida"))]
    pub correo: Option<String>,
    pub paralelo_id: Option<i32>,
}

// Response de estudiante; `paralelo` solo se incluye cuando el origen
// fue el join (listados y detalle)
#[derive(Debug, Serialize)]
pub struct EstudianteResponse {
    pub id: i32,
    pub nombre: String,
    pub cedula: String,
    pub correo: String,
    pub paralelo_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paralelo: Option<ParaleloResponse>,
}

impl From<Estudiante> for EstudianteResponse {
    fn from(estudiante: Estudiante) -> Self {
        Self {
            id: estudiante.id,
            nombre: estudiante.nombre,
            cedula: estudiante.cedula,
            correo: estudiante.correo,
            paralelo_id: estudiante.paralelo_id,
            created_at: estudiante.created_at,
            updated_at: estudiante.updated_at,
            paralelo: None,
        }
    }
}

impl From<EstudianteConParalelo> for EstudianteResponse {
    fn from(fila: EstudianteConParalelo) -> Self {
        Self {
            id: fila.id,
            nombre: fila.nombre,
            cedula: fila.cedula,
            correo: fila.correo,
            paralelo_id: fila.paralelo_id,
            created_at: fila.created_at,
            updated_at: fila.updated_at,
            paralelo: Some(ParaleloResponse {
                id: fila.paralelo_id,
                nombre: fila.paralelo_nombre,
                created_at: fila.paralelo_created_at,
                updated_at: fila.paralelo_updated_at,
            }),
        }
    }
}

// Response de operación sobre un estudiante, con mensaje de confirmación
#[derive(Debug, Serialize)]
pub struct EstudianteMensajeResponse {
    pub mensaje: String,
    pub estudiante: EstudianteResponse,
}
