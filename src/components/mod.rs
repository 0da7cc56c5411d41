//! UI Components
//!
//! Leptos components for the recipe views.

mod delete_recipe_button;
mod header;
mod new_recipe_form;
mod recipe_fields;
mod recipe_full;
mod recipe_list;
mod toast_container;

pub use delete_recipe_button::DeleteRecipeButton;
pub use header::Header;
pub use new_recipe_form::NewRecipeForm;
pub use recipe_fields::RecipeFields;
pub use recipe_full::RecipeFull;
pub use recipe_list::RecipeList;
pub use toast_container::{Toast, ToastContainer};
