//! Utilidades de validación
//!
//! Constructores de errores de campo con mensajes amigables. Las reglas de
//! formato (longitud, email) viven como atributos `validator` en los DTOs;
//! aquí están los errores que los controllers agregan a mano.

use validator::ValidationError;

/// Error de campo obligatorio ausente o vacío
pub fn required_field(message: &str) -> ValidationError {
    field_error("requerido", message)
}

/// Error de valor que ya existe en otro registro
pub fn duplicate_value(message: &str) -> ValidationError {
    field_error("duplicado", message)
}

/// Error de referencia a un registro inexistente
pub fn unknown_reference(message: &str) -> ValidationError {
    field_error("referencia_invalida", message)
}

fn field_error(code: &'static str, message: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.to_string().into());
    error
}
