//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DatabaseError(detalle) => {
                error!("Error de base de datos: {}", detalle);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "mensaje": "Ocurrió un error al acceder a la base de datos" }),
                )
            }

            AppError::ValidationError(errores) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "mensaje": "Los datos proporcionados no son válidos",
                    "errores": field_messages(&errores),
                }),
            ),

            AppError::NotFound(mensaje) => (StatusCode::NOT_FOUND, json!({ "mensaje": mensaje })),

            AppError::Conflict(mensaje) => (StatusCode::CONFLICT, json!({ "mensaje": mensaje })),

            AppError::BadRequest(mensaje) => {
                (StatusCode::BAD_REQUEST, json!({ "mensaje": mensaje }))
            }

            AppError::Internal(detalle) => {
                error!("Error interno: {}", detalle);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "mensaje": "Ocurrió un error inesperado" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Aplana `ValidationErrors` al cuerpo 422: campo -> lista de mensajes
pub fn field_messages(errores: &ValidationErrors) -> serde_json::Value {
    let mut campos = serde_json::Map::new();
    for (campo, lista) in errores.field_errors() {
        let mensajes: Vec<String> = lista
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        campos.insert(campo.to_string(), json!(mensajes));
    }
    serde_json::Value::Object(campos)
}

/// Traduce errores de sqlx a errores de la aplicación.
///
/// Las violaciones de unicidad o de clave foránea que le ganan una carrera a
/// la pre-validación se responden como 409 en lugar de un 500 genérico; los
/// índices únicos y la FK del esquema son la garantía real de los invariantes.
pub fn map_db_error(contexto: &str, error: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = error {
        if db.is_unique_violation() {
            return AppError::Conflict(
                "El registro entra en conflicto con un valor ya existente".to_string(),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::Conflict(
                "No se puede completar la operación porque hay registros asociados".to_string(),
            );
        }
    }
    AppError::DatabaseError(format!("{}: {}", contexto, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::required_field;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_produce_404_con_mensaje() {
        let response = AppError::NotFound("Paralelo no encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["mensaje"], "Paralelo no encontrado");
    }

    #[tokio::test]
    async fn test_validation_produce_422_con_mensajes_por_campo() {
        let mut errores = ValidationErrors::new();
        errores.add("nombre", required_field("El campo nombre es obligatorio"));

        let response = AppError::ValidationError(errores).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["mensaje"], "Los datos proporcionados no son válidos");
        assert_eq!(body["errores"]["nombre"][0], "El campo nombre es obligatorio");
    }

    #[tokio::test]
    async fn test_database_error_no_filtra_detalle() {
        let response = AppError::DatabaseError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(!body["mensaje"].as_str().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_conflict_produce_409() {
        let response = AppError::Conflict("ya existe".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_map_db_error_generico_es_database_error() {
        let error = map_db_error("Error listando paralelos", sqlx::Error::RowNotFound);
        assert!(matches!(error, AppError::DatabaseError(_)));
    }
}
