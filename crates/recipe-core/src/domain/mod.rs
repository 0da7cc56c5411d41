//! Domain Layer
//!
//! Recipe records, drafts and the field vocabulary shared by every surface.

mod draft;
mod entity;
mod field;
mod recipe;

pub use draft::{Draft, DEFAULT_IMAGE_URL};
pub use entity::{find_by_id, remove_by_id, replace_by_id, Entity};
pub use field::{parse_servings, RecipeField};
pub use recipe::{Recipe, RecipeId};
