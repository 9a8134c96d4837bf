//! Modelo de Paralelo
//!
//! Este módulo contiene el struct Paralelo que mapea exactamente a la
//! tabla paralelos con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Paralelo - mapea exactamente a la tabla paralelos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Paralelo {
    pub id: i32,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
