//! Application Context
//!
//! API access and toast bookkeeping shared via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_box_core::{ApiError, HttpRecipeApi, Notice, RecipeState};

use crate::components::Toast;
use crate::store::{AppStateStoreFields, AppStore};

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Shared client; clones reuse its connection pool
    api: StoredValue<HttpRecipeApi>,
    /// Toasts currently on screen
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpRecipeApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
        }
    }

    /// A handle to the recipe endpoints
    pub fn api(&self) -> HttpRecipeApi {
        self.api.get_value()
    }

    /// Mutate the book, then turn any notices it queued into toasts
    pub fn settle<T>(&self, apply: impl FnOnce(&mut RecipeState) -> T) -> T {
        let (outcome, notices) = {
            let book_field = self.store.book();
            let mut book = book_field.write();
            let outcome = apply(&mut *book);
            (outcome, book.take_notices())
        };
        for notice in notices {
            self.show(notice);
        }
        outcome
    }

    fn show(&self, notice: Notice) {
        let key = self.next_toast.get_value();
        self.next_toast.set_value(key + 1);
        self.toasts.update(|toasts| toasts.push(Toast { key, notice }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            ctx.dismiss(key);
        });
    }

    pub fn dismiss(&self, key: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.key != key));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Console line for a failed request, e.g. `[RecipeFull] Update failed: ...`
pub fn failure_line(source: &str, action: &str, error: &ApiError) -> String {
    format!("[{}] {} failed: {}", source, action, error)
}

/// Write a failed request to the browser console
pub fn log_failure(source: &str, action: &str, error: &ApiError) {
    web_sys::console::error_1(&failure_line(source, action, error).into());
}
