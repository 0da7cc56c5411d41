//! Delete Recipe Button
//!
//! Asks "Delete \"<title>\"?" before removing the selected recipe.

use leptos::prelude::*;

/// Confirmation prompt for deleting the named recipe
pub fn confirm_prompt(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        "Delete this recipe?".to_string()
    } else {
        format!("Delete \"{}\"?", title)
    }
}

#[component]
pub fn DeleteRecipeButton(
    /// Title of the recipe being deleted
    #[prop(into)]
    title: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let prompt = confirm_prompt(&title);

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm" role="alertdialog">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="delete-button"
                        on:click=move |_| {
                            confirming.set(false);
                            on_delete.run(());
                        }
                    >
                        "Yes, delete"
                    </button>
                    <button class="cancel-button" on:click=move |_| confirming.set(false)>
                        "Keep it"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-button" on:click=move |_| confirming.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}
