//! HeroService: the five record operations, logged at entry, success and failure.

use crate::error::{AppError, StoreError};
use crate::model::SuperHero;
use crate::store::{HeroStore, Mutation};
use std::sync::Arc;

#[derive(Clone)]
pub struct HeroService {
    store: Arc<dyn HeroStore>,
}

impl HeroService {
    pub fn new(store: Arc<dyn HeroStore>) -> Self {
        Self { store }
    }

    /// All records in id order.
    pub async fn list_heroes(&self) -> Result<Vec<SuperHero>, AppError> {
        tracing::info!("getting all super heroes from the database");
        let heroes = self
            .store
            .list()
            .await
            .map_err(|e| failed(e, None, "getting the super heroes from the database"))?;
        tracing::info!(count = heroes.len(), "super heroes retrieved");
        Ok(heroes)
    }

    /// The record with `id`; `NotFound` when no row matches.
    pub async fn get_hero(&self, id: i32) -> Result<SuperHero, AppError> {
        tracing::info!(hero_id = id, "getting super hero from the database");
        let hero = self
            .store
            .get(id)
            .await
            .map_err(|e| failed(e, Some(id), "getting the super hero from the database"))?;
        match hero {
            Some(hero) => {
                tracing::info!(hero_id = id, "super hero retrieved");
                Ok(hero)
            }
            None => {
                tracing::info!(hero_id = id, "super hero not found");
                Err(AppError::NotFound(format!("superhero {}", id)))
            }
        }
    }

    /// Insert `hero` (its id is ignored) and return the refreshed list.
    pub async fn create_hero(&self, hero: &SuperHero) -> Result<Vec<SuperHero>, AppError> {
        tracing::info!(name = %hero.name, "inserting a new super hero into the database");
        let m = self
            .store
            .insert(hero)
            .await
            .map_err(|e| failed(e, None, "inserting the new super hero into the database"))?;
        tracing::info!(count = m.heroes.len(), "super hero created");
        Ok(m.heroes)
    }

    /// Overwrite the record whose id is `hero.id` and return the refreshed list.
    /// An id with no row leaves the table as is.
    pub async fn update_hero(&self, hero: &SuperHero) -> Result<Vec<SuperHero>, AppError> {
        tracing::info!(hero_id = hero.id, "updating super hero in the database");
        let m = self
            .store
            .update(hero)
            .await
            .map_err(|e| failed(e, Some(hero.id), "updating the super hero in the database"))?;
        Ok(report(m, hero.id, "super hero updated"))
    }

    /// Remove the record with `id` and return the refreshed list.
    pub async fn delete_hero(&self, id: i32) -> Result<Vec<SuperHero>, AppError> {
        tracing::info!(hero_id = id, "deleting super hero from the database");
        let m = self
            .store
            .delete(id)
            .await
            .map_err(|e| failed(e, Some(id), "deleting the super hero from the database"))?;
        Ok(report(m, id, "super hero deleted"))
    }

    /// Store reachability, for readiness probes.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await.map_err(AppError::Store)
    }
}

fn failed(e: StoreError, hero_id: Option<i32>, doing: &str) -> AppError {
    tracing::error!(hero_id = ?hero_id, error = %e, "failed {}", doing);
    AppError::Store(e)
}

fn report(m: Mutation, id: i32, msg: &'static str) -> Vec<SuperHero> {
    if m.rows_affected == 0 {
        tracing::warn!(hero_id = id, "no super hero with this id; nothing changed");
    } else {
        tracing::info!(hero_id = id, count = m.heroes.len(), "{}", msg);
    }
    m.heroes
}
