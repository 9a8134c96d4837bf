use sqlx::PgPool;

use crate::models::paralelo::Paralelo;
use crate::utils::errors::{map_db_error, AppError};

pub struct ParaleloRepository {
    pool: PgPool,
}

impl ParaleloRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nombre: &str) -> Result<Paralelo, AppError> {
        sqlx::query_as::<_, Paralelo>(
            r#"
            INSERT INTO paralelos (nombre)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error creando paralelo", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Paralelo>, AppError> {
        sqlx::query_as::<_, Paralelo>("SELECT * FROM paralelos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error buscando paralelo", e))
    }

    pub async fn find_all(&self) -> Result<Vec<Paralelo>, AppError> {
        sqlx::query_as::<_, Paralelo>("SELECT * FROM paralelos ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Error listando paralelos", e))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM paralelos WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Error verificando paralelo", e))?;

        Ok(result.0)
    }

    /// Unicidad de nombre; `exclude_id` deja fuera al propio registro en updates
    pub async fn nombre_exists(
        &self,
        nombre: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM paralelos
                WHERE nombre = $1 AND ($2::INT4 IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(nombre)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error verificando nombre de paralelo", e))?;

        Ok(result.0)
    }

    pub async fn has_estudiantes(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM estudiantes WHERE paralelo_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Error verificando estudiantes del paralelo", e))?;

        Ok(result.0)
    }

    pub async fn update(&self, id: i32, nombre: &str) -> Result<Paralelo, AppError> {
        sqlx::query_as::<_, Paralelo>(
            r#"
            UPDATE paralelos
            SET nombre = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Error actualizando paralelo", e))?
        .ok_or_else(|| AppError::NotFound("Paralelo no encontrado".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM paralelos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Error eliminando paralelo", e))?;

        Ok(())
    }
}
