//! Recipe Detail Component
//!
//! Full view of the selected recipe, with inline editing and delete.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_box_core::{RecipeApi, RecipeField};

use crate::components::{DeleteRecipeButton, RecipeFields};
use crate::context::{log_failure, use_app_context};
use crate::store::AppStateStoreFields;

#[component]
pub fn RecipeFull() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (editing, set_editing) = signal(false);

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(recipe) = store.book().read_untracked().selected().cloned() else {
            return;
        };
        set_editing.set(false);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.update(&recipe).await;
            if let Err(e) = ctx.settle(move |book| book.finish_update(result)) {
                log_failure("RecipeFull", "Update", &e);
            }
        });
    };

    // Throw away unsaved edits by re-selecting the cached record
    let cancel_edit = move |_| {
        set_editing.set(false);
        let book_field = store.book();
        let mut book = book_field.write();
        let original = book
            .selected()
            .and_then(|selected| book.recipe(selected.id))
            .cloned();
        if let Some(original) = original {
            book.select(&original);
        }
    };

    let delete = Callback::new(move |_: ()| {
        let Some(id) = store.book().read_untracked().selected().map(|r| r.id) else {
            return;
        };
        web_sys::console::log_1(&format!("[RecipeFull] Deleting recipe {}", id).into());
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete(id).await;
            if let Err(e) = ctx.settle(move |book| book.finish_delete(id, result)) {
                log_failure("RecipeFull", "Delete", &e);
            }
        });
    });

    let value_of = Callback::new(move |field: RecipeField| {
        store
            .book()
            .read()
            .selected()
            .map(|recipe| recipe.field(field))
            .unwrap_or_default()
    });
    let on_change = Callback::new(move |(field, value): (RecipeField, String)| {
        if let Err(e) = store.book().write().set_selected_field(field, &value) {
            web_sys::console::warn_1(&format!("[RecipeFull] {}", e).into());
        }
    });

    let details = move || {
        store.book().read().selected().cloned().map(|recipe| {
            let ingredients = recipe
                .ingredients
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| view! { <li>{item.to_string()}</li> })
                .collect_view();
            view! {
                <article>
                    <header>
                        <figure>
                            <img alt=recipe.title.clone() src=recipe.image_url.clone() />
                        </figure>
                        <h2>{recipe.title.clone()}</h2>
                        <div class="button-container">
                            <button class="edit-button" on:click=move |_| set_editing.set(true)>
                                "Edit"
                            </button>
                            <button
                                class="cancel-button"
                                on:click=move |_| store.book().write().unselect()
                            >
                                "Close"
                            </button>
                            <DeleteRecipeButton title=recipe.title.clone() on_delete=delete />
                        </div>
                    </header>
                    <h3>"Description:"</h3>
                    <p>{recipe.description.clone()}</p>
                    <h3>"Ingredients:"</h3>
                    <ul class="ingredient-list">{ingredients}</ul>
                    <h3>"Instructions:"</h3>
                    <pre class="formatted-text">{recipe.instructions.clone()}</pre>
                    <h3>"Servings: " {recipe.servings}</h3>
                </article>
            }
        })
    };

    view! {
        <div class="recipe-details">
            <Show when=move || editing.get() fallback=details>
                <form class="edit-recipe-form" on:submit=save>
                    <h2>"Edit Recipe"</h2>
                    <RecipeFields value_of=value_of on_change=on_change />
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=cancel_edit>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}
