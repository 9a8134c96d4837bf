pub mod estudiante_routes;
pub mod paralelo_routes;

use axum::Router;

use crate::state::AppState;

/// Compone el router completo de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/paralelos", paralelo_routes::create_paralelo_router())
        .nest("/api/estudiantes", estudiante_routes::create_estudiante_router())
}
