use sqlx::PgPool;
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::dto::paralelo_dto::{
    CreateParaleloRequest, MensajeResponse, ParaleloMensajeResponse, ParaleloResponse,
    UpdateParaleloRequest,
};
use crate::repositories::paralelo_repository::ParaleloRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{duplicate_value, required_field};

pub struct ParaleloController {
    repository: ParaleloRepository,
}

impl ParaleloController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ParaleloRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<ParaleloResponse>> {
        let paralelos = self.repository.find_all().await?;

        Ok(paralelos.into_iter().map(ParaleloResponse::from).collect())
    }

    pub async fn create(&self, request: CreateParaleloRequest) -> AppResult<ParaleloMensajeResponse> {
        info!("Datos que llegan en la petición: {:?}", request);

        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        let nombre = request.nombre.as_deref().map(str::trim).unwrap_or_default();
        if nombre.is_empty() {
            errors.add("nombre", required_field("El campo nombre es obligatorio"));
        } else if self.repository.nombre_exists(nombre, None).await? {
            errors.add(
                "nombre",
                duplicate_value("El nombre del paralelo ya está registrado"),
            );
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let paralelo = self.repository.create(nombre).await?;
        info!("Paralelo creado con ID: {}", paralelo.id);

        Ok(ParaleloMensajeResponse {
            mensaje: "Paralelo creado exitosamente".to_string(),
            paralelo: paralelo.into(),
        })
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ParaleloResponse> {
        let paralelo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paralelo no encontrado".to_string()))?;

        Ok(paralelo.into())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateParaleloRequest,
    ) -> AppResult<ParaleloMensajeResponse> {
        let actual = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paralelo no encontrado".to_string()))?;

        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        let nombre = request.nombre.as_deref().map(str::trim).unwrap_or_default();
        if nombre.is_empty() {
            errors.add("nombre", required_field("El campo nombre es obligatorio"));
        } else if self.repository.nombre_exists(nombre, Some(actual.id)).await? {
            errors.add(
                "nombre",
                duplicate_value("El nombre del paralelo ya está registrado"),
            );
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let paralelo = self.repository.update(actual.id, nombre).await?;

        Ok(ParaleloMensajeResponse {
            mensaje: "Paralelo actualizado correctamente".to_string(),
            paralelo: paralelo.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> AppResult<MensajeResponse> {
        let paralelo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paralelo no encontrado".to_string()))?;

        // RESTRICT: la FK del esquema rechaza igualmente el DELETE si un
        // estudiante llega entre el check y la escritura
        if self.repository.has_estudiantes(paralelo.id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar el paralelo porque tiene estudiantes asociados".to_string(),
            ));
        }

        self.repository.delete(paralelo.id).await?;

        Ok(MensajeResponse {
            mensaje: "Paralelo eliminado correctamente".to_string(),
        })
    }
}
