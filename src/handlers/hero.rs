//! SuperHero handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::HeroIdPath;
use crate::model::SuperHero;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SuperHero>>, AppError> {
    let heroes = state.heroes.list_heroes().await?;
    Ok(Json(heroes))
}

pub async fn read(
    State(state): State<AppState>,
    HeroIdPath(id): HeroIdPath,
) -> Result<Json<SuperHero>, AppError> {
    let hero = state.heroes.get_hero(id).await?;
    Ok(Json(hero))
}

pub async fn create(
    State(state): State<AppState>,
    Json(hero): Json<SuperHero>,
) -> Result<Json<Vec<SuperHero>>, AppError> {
    let heroes = state.heroes.create_hero(&hero).await?;
    Ok(Json(heroes))
}

pub async fn update(
    State(state): State<AppState>,
    Json(hero): Json<SuperHero>,
) -> Result<Json<Vec<SuperHero>>, AppError> {
    let heroes = state.heroes.update_hero(&hero).await?;
    Ok(Json(heroes))
}

pub async fn delete(
    State(state): State<AppState>,
    HeroIdPath(id): HeroIdPath,
) -> Result<Json<Vec<SuperHero>>, AppError> {
    let heroes = state.heroes.delete_hero(id).await?;
    Ok(Json(heroes))
}
