//! HTTP handlers for the superhero endpoints.

pub mod hero;
