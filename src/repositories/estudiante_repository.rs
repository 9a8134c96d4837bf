use sqlx::PgPool;

use crate::models::estudiante::{Estudiante, EstudianteConParalelo};
use crate::utils::errors::{map_db_error, AppError};

/// Columnas del join con el paralelo asociado, con alias `paralelo_*`
const SELECT_CON_PARALELO: &str = r#"
    SELECT e.id, e.nombre, e.cedula, e.correo, e.paralelo_id,
           e.created_at, e.updated_at,
           p.nombre AS paralelo_nombre,
           p.created_at AS paralelo_created_at,
           p.updated_at AS paralelo_updated_at
    FROM estudiantes e
    INNER JOIN paralelos p ON p.id = e.paralelo_id
"#;

pub struct EstudianteRepository {
    pool: PgPool,
}

impl EstudianteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: &str,
        cedula: &str,
        correo: &str,
        paralelo_id: i32,
    ) -> Result<Estudiante, AppError> {
        sqlx::query_as::<_, Estudiante>(
            r#"
            INSERT INTO estudiantes (nombre, cedula, correo, paralelo_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(cedula)
        .bind(correo)
        .bind(paralelo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error creando estudiante", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Estudiante>, AppError> {
        sqlx::query_as::<_, Estudiante>("SELECT * FROM estudiantes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error buscando estudiante", e))
    }

    pub async fn find_by_id_with_paralelo(
        &self,
        id: i32,
    ) -> Result<Option<EstudianteConParalelo>, AppError> {
        let query = format!("{} WHERE e.id = $1", SELECT_CON_PARALELO);

        sqlx::query_as::<_, EstudianteConParalelo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error buscando estudiante con paralelo", e))
    }

    pub async fn find_all_with_paralelo(&self) -> Result<Vec<EstudianteConParalelo>, AppError> {
        let query = format!("{} ORDER BY e.id", SELECT_CON_PARALELO);

        sqlx::query_as::<_, EstudianteConParalelo>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Error listando estudiantes", e))
    }

    /// Unicidad de cédula; `exclude_id` deja fuera al propio registro en updates
    pub async fn cedula_exists(
        &self,
        cedula: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM estudiantes
                WHERE cedula = $1 AND ($2::INT4 IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(cedula)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error verificando cédula", e))?;

        Ok(result.0)
    }

    /// Unicidad de correo; `exclude_id` deja fuera al propio registro en updates
    pub async fn correo_exists(
        &self,
        correo: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM estudiantes
                WHERE correo = $1 AND ($2::INT4 IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(correo)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error verificando correo", e))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: i32,
        nombre: Option<String>,
        cedula: Option<String>,
        correo: Option<String>,
        paralelo_id: Option<i32>,
    ) -> Result<Estudiante, AppError> {
        // Obtener estudiante actual para conservar los campos no enviados
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))?;

        sqlx::query_as::<_, Estudiante>(
            r#"
            UPDATE estudiantes
            SET nombre = $2, cedula = $3, correo = $4, paralelo_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(actual.nombre))
        .bind(cedula.unwrap_or(actual.cedula))
        .bind(correo.unwrap_or(actual.correo))
        .bind(paralelo_id.unwrap_or(actual.paralelo_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error actualizando estudiante", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM estudiantes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Error eliminando estudiante", e))?;

        Ok(())
    }
}
