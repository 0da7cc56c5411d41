//! Client-side recipe search
//!
//! Case-insensitive substring match over title, ingredients and description.
//! Instructions, image URL and servings are not searched.

use crate::domain::Recipe;

/// Does `recipe` match an already-lowercased needle?
pub fn matches(recipe: &Recipe, needle: &str) -> bool {
    [&recipe.title, &recipe.ingredients, &recipe.description]
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}

/// Filtered view over `recipes`, in collection order.
///
/// An empty term disables filtering and yields every recipe.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    if term.is_empty() {
        return recipes.iter().collect();
    }
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches(recipe, &needle))
        .collect()
}
