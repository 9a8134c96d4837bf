use sqlx::PgPool;
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::dto::estudiante_dto::{
    CreateEstudianteRequest, EstudianteMensajeResponse, EstudianteResponse,
    UpdateEstudianteRequest,
};
use crate::dto::paralelo_dto::MensajeResponse;
use crate::repositories::estudiante_repository::EstudianteRepository;
use crate::repositories::paralelo_repository::ParaleloRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{duplicate_value, required_field, unknown_reference};

pub struct EstudianteController {
    repository: EstudianteRepository,
    paralelos: ParaleloRepository,
}

impl EstudianteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EstudianteRepository::new(pool.clone()),
            paralelos: ParaleloRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<EstudianteResponse>> {
        let estudiantes = self.repository.find_all_with_paralelo().await?;

        Ok(estudiantes
            .into_iter()
            .map(EstudianteResponse::from)
            .collect())
    }

    pub async fn create(
        &self,
        request: CreateEstudianteRequest,
    ) -> AppResult<EstudianteMensajeResponse> {
        info!("Datos que llegan en la petición: {:?}", request);

        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        let nombre = request.nombre.as_deref().map(str::trim).unwrap_or_default();
        if nombre.is_empty() {
            errors.add("nombre", required_field("El campo nombre es obligatorio"));
        }

        let cedula = request.cedula.as_deref().map(str::trim).unwrap_or_default();
        if cedula.is_empty() {
            errors.add("cedula", required_field("El campo cedula es obligatorio"));
        } else if self.repository.cedula_exists(cedula, None).await? {
            errors.add("cedula", duplicate_value("La cédula ya está registrada"));
        }

        let correo = request.correo.as_deref().map(str::trim).unwrap_or_default();
        if correo.is_empty() {
            errors.add("correo", required_field("El campo correo es obligatorio"));
        } else if self.repository.correo_exists(correo, None).await? {
            errors.add("correo", duplicate_value("El correo ya está registrado"));
        }

        match request.paralelo_id {
            Some(paralelo_id) => {
                if !self.paralelos.exists(paralelo_id).await? {
                    errors.add(
                        "paralelo_id",
                        unknown_reference("El paralelo seleccionado no existe"),
                    );
                }
            }
            None => errors.add(
                "paralelo_id",
                required_field("El campo paralelo_id es obligatorio"),
            ),
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let estudiante = self
            .repository
            .create(nombre, cedula, correo, request.paralelo_id.unwrap_or_default())
            .await?;
        info!("Estudiante creado con ID: {}", estudiante.id);

        Ok(EstudianteMensajeResponse {
            mensaje: "Estudiante creado correctamente".to_string(),
            estudiante: estudiante.into(),
        })
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<EstudianteResponse> {
        let estudiante = self
            .repository
            .find_by_id_with_paralelo(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))?;

        Ok(estudiante.into())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateEstudianteRequest,
    ) -> AppResult<EstudianteMensajeResponse> {
        let actual = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))?;

        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        // Update parcial: solo los campos presentes se validan y se aplican
        let nombre = match request.nombre.as_deref().map(str::trim) {
            Some("") => {
                errors.add("nombre", required_field("El campo nombre no puede estar vacío"));
                None
            }
            otro => otro.map(str::to_string),
        };

        let cedula = match request.cedula.as_deref().map(str::trim) {
            Some("") => {
                errors.add("cedula", required_field("El campo cedula no puede estar vacío"));
                None
            }
            Some(valor) => {
                if self.repository.cedula_exists(valor, Some(actual.id)).await? {
                    errors.add("cedula", duplicate_value("La cédula ya está registrada"));
                }
                Some(valor.to_string())
            }
            None => None,
        };

        let correo = match request.correo.as_deref().map(str::trim) {
            Some("") => {
                errors.add("correo", required_field("El campo correo no puede estar vacío"));
                None
            }
            Some(valor) => {
                if self.repository.correo_exists(valor, Some(actual.id)).await? {
                    errors.add("correo", duplicate_value("El correo ya está registrado"));
                }
                Some(valor.to_string())
            }
            None => None,
        };

        if let Some(paralelo_id) = request.paralelo_id {
            if !self.paralelos.exists(paralelo_id).await? {
                errors.add(
                    "paralelo_id",
                    unknown_reference("El paralelo seleccionado no existe"),
                );
            }
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let estudiante = self
            .repository
            .update(actual.id, nombre, cedula, correo, request.paralelo_id)
            .await?;

        Ok(EstudianteMensajeResponse {
            mensaje: "Estudiante actualizado correctamente".to_string(),
            estudiante: estudiante.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> AppResult<MensajeResponse> {
        let estudiante = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))?;

        self.repository.delete(estudiante.id).await?;

        Ok(MensajeResponse {
            mensaje: "Estudiante eliminado correctamente".to_string(),
        })
    }
}
