//! Recipe Box Core
//!
//! Client-side model of the recipe app:
//! - domain: recipes, drafts and editable fields
//! - api: the REST endpoints behind a trait, plus the reqwest client
//! - state: the single owner of client state and its reconciliation rules
//! - book: runs api calls and reconciliation together

pub mod api;
mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod notice;
pub mod search;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{HttpRecipeApi, RecipeApi, RecipeEnvelope};
pub use book::RecipeBook;
pub use config::ClientConfig;
pub use domain::{Draft, Entity, Recipe, RecipeField, RecipeId};
pub use error::{ApiError, ApiResult, ConfigError, FieldError};
pub use notice::{Notice, NoticeLevel};
pub use state::{RecipeState, View};
