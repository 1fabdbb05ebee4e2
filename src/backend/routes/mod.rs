use axum::Router;

use crate::backend::state::AppState;

pub mod appointment_routes;
pub mod center_routes;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            center_routes::router().merge(appointment_routes::router()),
        )
        .with_state(state)
}
