//! Repositories del sistema
//!
//! Todo el SQL de la aplicación vive aquí; los controllers no tocan el pool
//! directamente.

pub mod estudiante_repository;
pub mod paralelo_repository;
