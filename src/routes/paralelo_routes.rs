use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::paralelo_controller::ParaleloController;
use crate::dto::paralelo_dto::{
    CreateParaleloRequest, MensajeResponse, ParaleloMensajeResponse, ParaleloResponse,
    UpdateParaleloRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_paralelo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_paralelos))
        .route("/", post(create_paralelo))
        .route("/:id", get(get_paralelo))
        .route("/:id", put(update_paralelo))
        .route("/:id", delete(delete_paralelo))
}

async fn list_paralelos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParaleloResponse>>, AppError> {
    let controller = ParaleloController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_paralelo(
    State(state): State<AppState>,
    Json(request): Json<CreateParaleloRequest>,
) -> Result<(StatusCode, Json<ParaleloMensajeResponse>), AppError> {
    let controller = ParaleloController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_paralelo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParaleloResponse>, AppError> {
    let controller = ParaleloController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_paralelo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateParaleloRequest>,
) -> Result<Json<ParaleloMensajeResponse>, AppError> {
    let controller = ParaleloController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_paralelo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MensajeResponse>, AppError> {
    let controller = ParaleloController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
