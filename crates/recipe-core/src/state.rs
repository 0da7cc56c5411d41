//! Recipe State
//!
//! The single owner of client-side state: the cached collection, the current
//! selection, the new-recipe draft, the search term and the pending notices.
//!
//! Network calls happen elsewhere. Each `finish_*` method takes the result of
//! one call and reconciles local state with it, so the same rules apply
//! whether the call was driven by [`crate::RecipeBook`] or by a UI task.

use std::mem;

use crate::domain::{self, Draft, Entity, Recipe, RecipeField, RecipeId};
use crate::error::{ApiError, ApiResult, FieldError};
use crate::notice::{messages, Notice};
use crate::search::filter_recipes;

/// Which screen the client should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    RecipeList,
    RecipeDetail,
    NewRecipeForm,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeState {
    /// Cache of server truth, in server order
    recipes: Vec<Recipe>,
    /// Working copy of the selected recipe
    selected: Option<Recipe>,
    draft: Draft,
    search_term: String,
    new_form_open: bool,
    notices: Vec<Notice>,
}

impl RecipeState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Snapshots
    // ========================

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        domain::find_by_id(&self.recipes, id)
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_new_form_open(&self) -> bool {
        self.new_form_open
    }

    /// Recipes to display: the collection filtered by the search term.
    /// Recomputed on every call.
    pub fn displayed(&self) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, &self.search_term)
    }

    pub fn view(&self) -> View {
        if self.new_form_open {
            View::NewRecipeForm
        } else if self.selected.is_some() {
            View::RecipeDetail
        } else {
            View::RecipeList
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain queued notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        mem::take(&mut self.notices)
    }

    // ========================
    // Local Interactions
    // ========================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a recipe for the detail view. The selection is a copy; edits
    /// to it reach the collection only through a successful update.
    pub fn select(&mut self, recipe: &Recipe) {
        self.selected = Some(recipe.clone());
    }

    pub fn unselect(&mut self) {
        self.selected = None;
    }

    /// Open the creation view. Clears the selection.
    pub fn show_new_form(&mut self) {
        self.new_form_open = true;
        self.selected = None;
    }

    /// Close the creation view, keeping the draft
    pub fn hide_new_form(&mut self) {
        self.new_form_open = false;
    }

    pub fn set_draft_field(&mut self, field: RecipeField, value: &str) -> Result<(), FieldError> {
        self.draft.set_field(field, value)
    }

    /// Edit the selected copy. No-op without a selection.
    pub fn set_selected_field(&mut self, field: RecipeField, value: &str) -> Result<(), FieldError> {
        match self.selected.as_mut() {
            Some(recipe) => recipe.set_field(field, value),
            None => Ok(()),
        }
    }

    // ========================
    // Reconciliation
    // ========================

    /// Apply the result of listing the collection.
    ///
    /// On failure the collection is left as it was (empty on first load).
    pub fn finish_load(&mut self, result: ApiResult<Vec<Recipe>>) -> ApiResult<usize> {
        match result {
            Ok(recipes) => {
                log::debug!("loaded {} recipes", recipes.len());
                self.recipes = recipes;
                Ok(self.recipes.len())
            }
            Err(err) => Err(self.fail(err, messages::LOAD_REJECTED)),
        }
    }

    /// Apply the result of submitting the draft.
    ///
    /// Success appends the server's record, resets the draft and closes the
    /// creation view. Failure changes nothing but the notice queue.
    pub fn finish_create(&mut self, result: ApiResult<Recipe>) -> ApiResult<RecipeId> {
        match result {
            Ok(recipe) => {
                let id = recipe.id();
                log::debug!("created recipe {id}");
                self.recipes.push(recipe);
                self.draft = Draft::default();
                self.new_form_open = false;
                self.notices.push(Notice::success(messages::CREATED));
                Ok(id)
            }
            Err(err) => Err(self.fail(err, messages::CREATE_REJECTED)),
        }
    }

    /// Apply the result of updating the selected recipe.
    ///
    /// The selection is cleared whatever the outcome.
    pub fn finish_update(&mut self, result: ApiResult<Recipe>) -> ApiResult<RecipeId> {
        self.selected = None;
        match result {
            Ok(recipe) => {
                let id = recipe.id();
                if !domain::replace_by_id(&mut self.recipes, recipe) {
                    log::warn!("updated recipe {id} is not in the local collection");
                }
                self.notices.push(Notice::success(messages::UPDATED));
                Ok(id)
            }
            Err(err) => Err(self.fail(err, messages::UPDATE_REJECTED)),
        }
    }

    /// Apply the result of deleting recipe `id`
    pub fn finish_delete(&mut self, id: RecipeId, result: ApiResult<()>) -> ApiResult<()> {
        match result {
            Ok(()) => {
                let removed = domain::remove_by_id(&mut self.recipes, id);
                log::debug!("deleted recipe {id} ({removed} local copies)");
                self.selected = None;
                self.notices.push(Notice::success(messages::DELETED));
                Ok(())
            }
            Err(err) => Err(self.fail(err, messages::DELETE_REJECTED)),
        }
    }

    /// Log a failed call and queue the user-facing notice for it
    fn fail(&mut self, err: ApiError, rejected_message: &str) -> ApiError {
        let message = match &err {
            ApiError::Transport(detail) => {
                log::error!("An error occurred during the request: {detail}");
                messages::UNEXPECTED
            }
            ApiError::Rejected { status } => {
                log::warn!("request rejected with status {status}");
                rejected_message
            }
        };
        self.notices.push(Notice::error(message));
        err
    }
}
