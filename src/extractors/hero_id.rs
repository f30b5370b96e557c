//! Extract the `{heroId}` path segment as an integer.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer hero id from the last path segment. Anything that is not an `i32`,
/// including a segment that does not decode, names no hero route and is answered with 404.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for HeroIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::NotFound(format!("no route for superhero id: {}", e.body_text()))
            })?;
        raw.trim()
            .parse::<i32>()
            .map(HeroIdPath)
            .map_err(|_| AppError::NotFound(format!("no route for superhero id '{}'", raw)))
    }
}
