//! Shared application state for all routes.

use crate::service::HeroService;

#[derive(Clone)]
pub struct AppState {
    pub heroes: HeroService,
}
