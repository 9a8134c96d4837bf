//! Controllers del sistema
//!
//! Validación de entrada, chequeos de unicidad y de claves foráneas, y
//! orquestación de una operación de lectura-validación-escritura por request.

pub mod estudiante_controller;
pub mod paralelo_controller;
