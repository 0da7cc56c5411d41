//! Recipe Entity
//!
//! The server's canonical record. The client never invents ids; a `Recipe`
//! only exists locally after the server has returned it.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::field::{parse_servings, RecipeField};
use crate::error::FieldError;

/// Server-assigned recipe identifier
pub type RecipeId = u32;

/// A recipe as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, assigned by the server
    pub id: RecipeId,
    pub title: String,
    /// Free text
    pub ingredients: String,
    /// Free text
    pub instructions: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub servings: u32,
}

impl Recipe {
    /// Current value of a field, as form text
    pub fn field(&self, field: RecipeField) -> String {
        match field {
            RecipeField::Title => self.title.clone(),
            RecipeField::Ingredients => self.ingredients.clone(),
            RecipeField::Instructions => self.instructions.clone(),
            RecipeField::Description => self.description.clone(),
            RecipeField::ImageUrl => self.image_url.clone(),
            RecipeField::Servings => self.servings.to_string(),
        }
    }

    /// Set a field from form text. The record is untouched on error.
    pub fn set_field(&mut self, field: RecipeField, value: &str) -> Result<(), FieldError> {
        match field {
            RecipeField::Title => self.title = value.to_string(),
            RecipeField::Ingredients => self.ingredients = value.to_string(),
            RecipeField::Instructions => self.instructions = value.to_string(),
            RecipeField::Description => self.description = value.to_string(),
            RecipeField::ImageUrl => self.image_url = value.to_string(),
            RecipeField::Servings => self.servings = parse_servings(value)?,
        }
        Ok(())
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
