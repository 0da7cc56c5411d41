//! Recipe Book Flow Tests
//!
//! Drives RecipeBook against an in-memory API fake.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use crate::api::RecipeApi;
    use crate::domain::{Draft, Recipe, RecipeField, RecipeId};
    use crate::error::{ApiError, ApiResult};
    use crate::notice::{messages, Notice};
    use crate::state::View;
    use crate::RecipeBook;

    /// In-memory stand-in for the REST server
    #[derive(Default)]
    struct FakeApi {
        rows: RefCell<Vec<Recipe>>,
        next_id: Cell<RecipeId>,
        /// When set, every call fails with this error
        failure: RefCell<Option<ApiError>>,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn seeded(rows: Vec<Recipe>) -> Self {
            let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            Self {
                rows: RefCell::new(rows),
                next_id: Cell::new(next_id),
                ..Default::default()
            }
        }

        fn fail_with(&self, err: ApiError) {
            *self.failure.borrow_mut() = Some(err);
        }

        fn check(&self) -> ApiResult<()> {
            self.calls.set(self.calls.get() + 1);
            match self.failure.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl RecipeApi for FakeApi {
        async fn list(&self) -> ApiResult<Vec<Recipe>> {
            self.check()?;
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &Draft) -> ApiResult<Recipe> {
            self.check()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            // Server normalizes the title so tests can tell its record from the draft
            let recipe = Recipe {
                id,
                title: draft.title.trim().to_string(),
                ingredients: draft.ingredients.clone(),
                instructions: draft.instructions.clone(),
                description: draft.description.clone(),
                image_url: draft.image_url.clone(),
                servings: draft.servings,
            };
            self.rows.borrow_mut().push(recipe.clone());
            Ok(recipe)
        }

        async fn update(&self, recipe: &Recipe) -> ApiResult<Recipe> {
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            let slot = rows
                .iter_mut()
                .find(|r| r.id == recipe.id)
                .ok_or(ApiError::Rejected { status: 404 })?;
            *slot = recipe.clone();
            slot.title = slot.title.trim().to_string();
            Ok(slot.clone())
        }

        async fn delete(&self, id: RecipeId) -> ApiResult<()> {
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(ApiError::Rejected { status: 404 });
            }
            Ok(())
        }
    }

    fn recipe(id: RecipeId, title: &str, ingredients: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            instructions: "Cook it".to_string(),
            description: String::new(),
            image_url: String::new(),
            servings: 2,
        }
    }

    async fn setup_book() -> RecipeBook<FakeApi> {
        let api = FakeApi::seeded(vec![
            recipe(1, "Soup", "water"),
            recipe(2, "Salad", "lettuce"),
            recipe(3, "Bread", "flour"),
        ]);
        let mut book = RecipeBook::new(api);
        book.load().await.expect("Failed to load");
        book
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let book = setup_book().await;
        assert_eq!(book.state().recipes().len(), 3);
        assert!(book.state().notices().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_empty() {
        let api = FakeApi::seeded(vec![recipe(1, "Soup", "water")]);
        api.fail_with(ApiError::Rejected { status: 503 });
        let mut book = RecipeBook::new(api);

        assert!(book.load().await.is_err());
        assert!(book.state().recipes().is_empty());
        assert_eq!(book.state().notices(), &[Notice::error(messages::LOAD_REJECTED)]);
        assert_eq!(book.api().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_create_uses_server_record() {
        let mut book = setup_book().await;
        book.state_mut().show_new_form();
        book.state_mut()
            .set_draft_field(RecipeField::Title, "  Pancakes ")
            .unwrap();
        book.state_mut()
            .set_draft_field(RecipeField::Servings, "4")
            .unwrap();

        let id = book.create().await.expect("Create failed");

        let state = book.state();
        assert_eq!(id, 4);
        assert_eq!(state.recipes().len(), 4);
        let created = state.recipes().last().unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.title, "Pancakes");
        assert_eq!(created.servings, 4);
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.view(), View::RecipeList);
        assert_eq!(state.notices(), &[Notice::success(messages::CREATED)]);
    }

    #[tokio::test]
    async fn test_create_server_error_keeps_everything() {
        let mut book = setup_book().await;
        book.state_mut().show_new_form();
        book.state_mut()
            .set_draft_field(RecipeField::Title, "Pancakes")
            .unwrap();
        let before = book.state().recipes().to_vec();
        book.api().fail_with(ApiError::Rejected { status: 500 });

        let result = book.create().await;

        assert_eq!(result, Err(ApiError::Rejected { status: 500 }));
        let state = book.state();
        assert_eq!(state.recipes(), &before[..]);
        assert_eq!(state.draft().title, "Pancakes");
        assert!(state.is_new_form_open());
        assert_eq!(state.view(), View::NewRecipeForm);
    }

    #[tokio::test]
    async fn test_update_replaces_matching_recipe() {
        let mut book = setup_book().await;
        let salad = book.state().recipe(2).cloned().unwrap();
        book.state_mut().select(&salad);
        book.state_mut()
            .set_selected_field(RecipeField::Title, "Caesar Salad  ")
            .unwrap();

        let id = book.update_selected().await.unwrap().expect("Update failed");

        let state = book.state();
        assert_eq!(id, 2);
        assert_eq!(state.recipes().len(), 3);
        assert_eq!(state.recipes()[1].title, "Caesar Salad");
        assert_eq!(state.recipes()[0], recipe(1, "Soup", "water"));
        assert_eq!(state.recipes()[2], recipe(3, "Bread", "flour"));
        assert!(state.selected().is_none());
    }

    #[tokio::test]
    async fn test_update_failure_clears_selection() {
        let mut book = setup_book().await;
        let salad = book.state().recipe(2).cloned().unwrap();
        book.state_mut().select(&salad);
        book.state_mut()
            .set_selected_field(RecipeField::Title, "Caesar")
            .unwrap();
        book.api().fail_with(ApiError::Transport("connection reset".into()));

        let result = book.update_selected().await.unwrap();

        assert!(result.is_err());
        assert_eq!(book.state().recipe(2).unwrap().title, "Salad");
        assert!(book.state().selected().is_none());
        assert_eq!(book.state().notices(), &[Notice::error(messages::UNEXPECTED)]);
    }

    #[tokio::test]
    async fn test_update_without_selection_sends_nothing() {
        let mut book = setup_book().await;
        let calls = book.api().calls.get();
        assert!(book.update_selected().await.is_none());
        assert_eq!(book.api().calls.get(), calls);
    }

    #[tokio::test]
    async fn test_delete_removes_recipe() {
        let mut book = setup_book().await;
        let soup = book.state().recipe(1).cloned().unwrap();
        book.state_mut().select(&soup);

        book.delete(1).await.expect("Delete failed");

        let state = book.state();
        assert_eq!(state.recipes().len(), 2);
        assert!(state.recipes().iter().all(|r| r.id != 1));
        assert!(state.selected().is_none());
        assert_eq!(state.notices(), &[Notice::success(messages::DELETED)]);
    }

    #[tokio::test]
    async fn test_delete_rejected_keeps_collection() {
        let mut book = setup_book().await;

        let result = book.delete(99).await;

        assert_eq!(result, Err(ApiError::Rejected { status: 404 }));
        assert_eq!(book.state().recipes().len(), 3);
        assert_eq!(
            book.state().notices(),
            &[Notice::error(messages::DELETE_REJECTED)]
        );
    }

    #[tokio::test]
    async fn test_search_after_reload() {
        let mut book = setup_book().await;
        book.state_mut().set_search_term("sal");
        let ids: Vec<_> = book.state().displayed().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        book.state_mut().set_search_term("");
        assert_eq!(book.state().displayed().len(), 3);
    }
}
