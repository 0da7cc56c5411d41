//! Recipe Book
//!
//! Couples a [`RecipeApi`] with a [`RecipeState`]: every operation makes one
//! call and hands its result to the matching `finish_*` reconciliation.
//!
//! Operations take `&mut self` for their whole duration, so one book never
//! has two requests in flight.

use crate::api::RecipeApi;
use crate::domain::RecipeId;
use crate::error::ApiResult;
use crate::state::RecipeState;

pub struct RecipeBook<A> {
    api: A,
    state: RecipeState,
}

impl<A: RecipeApi> RecipeBook<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RecipeState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &RecipeState {
        &self.state
    }

    /// Local interactions (selection, form edits, search term)
    pub fn state_mut(&mut self) -> &mut RecipeState {
        &mut self.state
    }

    /// Fetch the full collection. No retry on failure.
    pub async fn load(&mut self) -> ApiResult<usize> {
        let result = self.api.list().await;
        self.state.finish_load(result)
    }

    /// Submit the current draft
    pub async fn create(&mut self) -> ApiResult<RecipeId> {
        let result = self.api.create(self.state.draft()).await;
        self.state.finish_create(result)
    }

    /// Submit the selected recipe. Returns `None`, without a request, when
    /// nothing is selected.
    pub async fn update_selected(&mut self) -> Option<ApiResult<RecipeId>> {
        let recipe = self.state.selected()?;
        let result = self.api.update(recipe).await;
        Some(self.state.finish_update(result))
    }

    pub async fn delete(&mut self, id: RecipeId) -> ApiResult<()> {
        let result = self.api.delete(id).await;
        self.state.finish_delete(id, result)
    }
}
