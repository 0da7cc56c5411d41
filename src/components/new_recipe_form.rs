//! New Recipe Form Component
//!
//! Edits the draft and submits it to the server.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_box_core::{RecipeApi, RecipeField};

use crate::components::RecipeFields;
use crate::context::{log_failure, use_app_context};
use crate::store::AppStateStoreFields;

#[component]
pub fn NewRecipeForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let create_recipe = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = store.book().read_untracked().draft().clone();
        let api = ctx.api();
        spawn_local(async move {
            let result = api.create(&draft).await;
            match ctx.settle(move |book| book.finish_create(result)) {
                Ok(id) => web_sys::console::log_1(&format!("[NewRecipeForm] Created recipe {}", id).into()),
                Err(e) => log_failure("NewRecipeForm", "Create", &e),
            }
        });
    };

    let value_of = Callback::new(move |field: RecipeField| store.book().read().draft().field(field));
    let on_change = Callback::new(move |(field, value): (RecipeField, String)| {
        if let Err(e) = store.book().write().set_draft_field(field, &value) {
            web_sys::console::warn_1(&format!("[NewRecipeForm] {}", e).into());
        }
    });

    view! {
        <div class="recipe-form">
            <h2>"New Recipe"</h2>
            <button class="cancel-button" on:click=move |_| store.book().write().hide_new_form()>
                "Close"
            </button>
            <form on:submit=create_recipe>
                <RecipeFields value_of=value_of on_change=on_change />
                <button type="submit">"Save Recipe"</button>
            </form>
        </div>
    }
}
