//! Recipe Fields Component
//!
//! Labelled inputs for every editable recipe field, shared by the create and
//! edit forms.

use leptos::prelude::*;
use recipe_box_core::RecipeField;

#[component]
pub fn RecipeFields(
    /// Current text of a field
    #[prop(into)]
    value_of: Callback<RecipeField, String>,
    /// Called with the new text on every keystroke, or once editing ends
    /// for numeric fields
    #[prop(into)]
    on_change: Callback<(RecipeField, String)>,
) -> impl IntoView {
    RecipeField::ALL
        .into_iter()
        .map(|field| {
            let input = if field.is_multiline() {
                view! {
                    <textarea
                        name=field.name()
                        rows="5"
                        prop:value=move || value_of.run(field)
                        on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                    />
                }
                .into_any()
            } else if field.is_numeric() {
                // Fires on blur or Enter; a refused value snaps back to the stored one
                view! {
                    <input
                        type="number"
                        min="1"
                        name=field.name()
                        prop:value=move || value_of.run(field)
                        on:change=move |ev| on_change.run((field, event_target_value(&ev)))
                    />
                }
                .into_any()
            } else {
                view! {
                    <input
                        type="text"
                        name=field.name()
                        prop:value=move || value_of.run(field)
                        on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                    />
                }
                .into_any()
            };
            view! {
                <label class="recipe-field">
                    <span>{field.label()}</span>
                    {input}
                </label>
            }
        })
        .collect_view()
}
