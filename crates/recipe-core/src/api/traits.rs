//! REST API - Core Trait
//!
//! Abstract interface to the recipe endpoints. The browser build and the
//! native CLI share one implementation; tests swap in fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Draft, Recipe, RecipeId};
use crate::error::ApiResult;

/// Response body of create and update: `{"recipe": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    pub recipe: Recipe,
}

/// The four recipe endpoints
///
/// Futures are not `Send`: the client runs on a single-threaded executor
/// (the browser event loop, or a current-thread runtime natively).
#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /api/recipes`
    async fn list(&self) -> ApiResult<Vec<Recipe>>;

    /// `POST /api/recipes`, returns the canonical record
    async fn create(&self, draft: &Draft) -> ApiResult<Recipe>;

    /// `PUT /api/recipes/{id}` with the full record, returns the canonical record
    async fn update(&self, recipe: &Recipe) -> ApiResult<Recipe>;

    /// `DELETE /api/recipes/{id}`
    async fn delete(&self, id: RecipeId) -> ApiResult<()>;
}
