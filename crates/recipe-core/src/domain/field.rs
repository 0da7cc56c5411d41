//! Editable Recipe Fields
//!
//! Forms address recipe fields by name. This maps those names onto a closed
//! set and parses form text into typed values.

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// One editable field of a recipe or draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Title,
    Ingredients,
    Instructions,
    Description,
    ImageUrl,
    Servings,
}

impl RecipeField {
    /// Fields in form order
    pub const ALL: [RecipeField; 6] = [
        RecipeField::Title,
        RecipeField::Description,
        RecipeField::Ingredients,
        RecipeField::Instructions,
        RecipeField::ImageUrl,
        RecipeField::Servings,
    ];

    /// Form/JSON name of the field
    pub fn name(&self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::Ingredients => "ingredients",
            RecipeField::Instructions => "instructions",
            RecipeField::Description => "description",
            RecipeField::ImageUrl => "image_url",
            RecipeField::Servings => "servings",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RecipeField::Title => "Title",
            RecipeField::Ingredients => "Ingredients",
            RecipeField::Instructions => "Instructions",
            RecipeField::Description => "Description",
            RecipeField::ImageUrl => "Image URL",
            RecipeField::Servings => "Servings",
        }
    }

    /// Whether the field holds long free text
    pub fn is_multiline(&self) -> bool {
        matches!(self, RecipeField::Ingredients | RecipeField::Instructions)
    }

    /// Whether the field holds a number. Numeric fields are committed when
    /// editing ends; partial input such as `""` does not parse.
    pub fn is_numeric(&self) -> bool {
        matches!(self, RecipeField::Servings)
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecipeField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Parse a servings value; only positive integers are accepted
pub fn parse_servings(value: &str) -> Result<u32, FieldError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FieldError::InvalidServings(value.to_string())),
    }
}
