//! REST API Layer
//!
//! Client bindings for the recipe endpoints.

mod http;
mod traits;

pub use http::HttpRecipeApi;
pub use traits::{RecipeApi, RecipeEnvelope};
