//! Header Component
//!
//! App title, search box and the "add recipe" entry point.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    // Clicking the title returns to the full list
    let go_home = move |_| {
        let book_field = store.book();
        let mut book = book_field.write();
        book.unselect();
        book.hide_new_form();
    };

    view! {
        <header class="recipe-header">
            <h1 class="logo" on:click=go_home>"My Favorite Recipes"</h1>
            <div class="search">
                <input
                    type="text"
                    placeholder="Search"
                    prop:value=move || store.book().read().search_term().to_string()
                    on:input=move |ev| {
                        store.book().write().set_search_term(event_target_value(&ev));
                    }
                />
            </div>
            <button class="new-recipe" on:click=move |_| store.book().write().show_new_form()>
                "Add New Recipe"
            </button>
        </header>
    }
}
