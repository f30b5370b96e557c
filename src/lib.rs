//! SuperHero API: CRUD over the `SuperHeroes` table, served with axum on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use model::SuperHero;
pub use routes::{app_router, common_routes, hero_routes, HERO_ROUTE_PREFIX};
pub use service::HeroService;
pub use state::AppState;
pub use store::{HeroStore, Mutation, PgHeroStore};
