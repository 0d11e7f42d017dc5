use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::routing::RouterExt;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

pub mod clinica;

pub use clinica::{ClinicaError, ClinicaResult, api, cli, config, database, state};

use state::AppState;

/// Builds the full `/api` router over the given state. The binary and
/// the integration tests share this, only the database differs.
pub fn router(state: AppState) -> Router {
    let owner_routes = Router::new()
        .route_with_tsr("/api/owners", get(api::owners::get_all_owners))
        .route_with_tsr(
            "/api/owner/{id}",
            get(api::owners::get_owner)
                .put(api::owners::put_owner)
                .delete(api::owners::delete_owner),
        )
        .route_with_tsr(
            "/api/owner/{nombre}/{apellido}",
            post(api::owners::post_owner),
        );

    let animal_routes = Router::new()
        .route_with_tsr("/api/animals", get(api::animals::get_all_animals))
        .route_with_tsr(
            "/api/animal/{id}",
            get(api::animals::get_animal)
                .put(api::animals::put_animal)
                .delete(api::animals::delete_animal),
        )
        .route_with_tsr(
            "/api/animal/{owner_id}/{tipo}/{nombre}/{peso}",
            post(api::animals::post_animal),
        );

    Router::new()
        .merge(owner_routes)
        .merge(animal_routes)
        .layer(
            TraceLayer::new_for_http().make_span_with(
                DefaultMakeSpan::new()
                    .level(tracing::Level::INFO)
                    .include_headers(false),
            ),
        )
        .with_state(state)
}
