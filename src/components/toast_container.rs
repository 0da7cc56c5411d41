//! Toast Container Component
//!
//! Renders queued notices; each toast dismisses itself after a delay or on click.

use leptos::prelude::*;
use recipe_box_core::Notice;

use crate::context::use_app_context;

/// A notice on screen, keyed for removal
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub key: u64,
    pub notice: Notice,
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-container">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.key
                children=move |toast| {
                    let key = toast.key;
                    let class = format!("toast toast-{}", toast.notice.level.as_str());
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.dismiss(key)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
