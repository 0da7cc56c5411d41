//! Recipe List Components
//!
//! The searchable list of recipe cards.

use leptos::prelude::*;
use recipe_box_core::Recipe;

use crate::store::{use_app_store, AppStateStoreFields};

/// Characters of description shown on a card
const EXCERPT_LENGTH: usize = 100;

/// Every recipe matching the current search term
#[component]
pub fn RecipeList() -> impl IntoView {
    let store = use_app_store();

    let displayed = move || {
        store
            .book()
            .read()
            .displayed()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="recipe-list">
            <For
                each=displayed
                // Whole record as key so a replaced recipe re-renders
                key=|recipe| recipe.clone()
                children=move |recipe| view! { <RecipeExcerpt recipe=recipe /> }
            />
        </div>
    }
}

/// Card with image, title and a short description
#[component]
pub fn RecipeExcerpt(recipe: Recipe) -> impl IntoView {
    let store = use_app_store();
    let summary = truncate_text(&recipe.description, EXCERPT_LENGTH);
    let title = recipe.title.clone();
    let image_url = recipe.image_url.clone();

    view! {
        <article class="recipe-card">
            <figure>
                <img src=image_url alt=title.clone() />
            </figure>
            <h2>{title}</h2>
            <p class="flex-spacing">"Description: " {summary}</p>
            <button on:click=move |_| store.book().write().select(&recipe)>"View"</button>
        </article>
    }
}

fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}
