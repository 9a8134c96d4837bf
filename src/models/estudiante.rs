//! Modelo de Estudiante
//!
//! Este módulo contiene el struct Estudiante que mapea exactamente a la
//! tabla estudiantes, y la fila plana del join con paralelos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estudiante - mapea exactamente a la tabla estudiantes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Estudiante {
    pub id: i32,
    pub nombre: String,
    pub cedula: String,
    pub correo: String,
    pub paralelo_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fila del join estudiantes ⋈ paralelos.
///
/// La relación se resuelve con un JOIN explícito en el repository; las
/// columnas del paralelo llegan con alias `paralelo_*`.
#[derive(Debug, Clone, FromRow)]
pub struct EstudianteConParalelo {
    pub id: i32,
    pub nombre: String,
    pub cedula: String,
    pub correo: String,
    pub paralelo_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub paralelo_nombre: String,
    pub paralelo_created_at: DateTime<Utc>,
    pub paralelo_updated_at: DateTime<Utc>,
}
