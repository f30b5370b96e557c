//! SuperHero routes, mounted under `/api/superhero`.

use crate::handlers::hero::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const HERO_ROUTE_PREFIX: &str = "/api/superhero";

pub fn hero_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).put(update))
        .route("/:hero_id", get(read).delete(delete_handler))
        .with_state(state)
}
