use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::estudiante_controller::EstudianteController;
use crate::dto::estudiante_dto::{
    CreateEstudianteRequest, EstudianteMensajeResponse, EstudianteResponse,
    UpdateEstudianteRequest,
};
use crate::dto::paralelo_dto::MensajeResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estudiante_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_estudiantes))
        .route("/", post(create_estudiante))
        .route("/:id", get(get_estudiante))
        .route("/:id", put(update_estudiante))
        .route("/:id", delete(delete_estudiante))
}

async fn list_estudiantes(
    State(state): State<AppState>,
) -> Result<Json<Vec<EstudianteResponse>>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_estudiante(
    State(state): State<AppState>,
    Json(request): Json<CreateEstudianteRequest>,
) -> Result<(StatusCode, Json<EstudianteMensajeResponse>), AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_estudiante(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EstudianteResponse>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_estudiante(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEstudianteRequest>,
) -> Result<Json<EstudianteMensajeResponse>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_estudiante(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MensajeResponse>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
