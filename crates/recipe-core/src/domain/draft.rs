//! Draft Recipe
//!
//! Client-held recipe data that has not been persisted yet. It has no id;
//! the server assigns one on create.

use serde::{Deserialize, Serialize};

use super::field::{parse_servings, RecipeField};
use crate::error::FieldError;

/// Stock photo used until the user supplies an image
pub const DEFAULT_IMAGE_URL: &str = "https://images.pexels.com/photos/9986228/pexels-photo-9986228.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// A new recipe awaiting submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub description: String,
    pub image_url: String,
    pub servings: u32,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            description: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            servings: 1,
        }
    }
}

impl Draft {
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

    /// Set a field from form text. The draft is untouched on error.
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
