//! Recipe Box Frontend App
//!
//! Main application component: header, one of list/detail/new-form, toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_box_core::config::DEFAULT_API_URL;
use recipe_box_core::{ClientConfig, HttpRecipeApi, RecipeApi, View as Screen};

use crate::components::{Header, NewRecipeForm, RecipeFull, RecipeList, ToastContainer};
use crate::context::{log_failure, AppContext};
use crate::store::{AppState, AppStateStoreFields};

/// The API is served from the same origin as the page
fn api_config() -> ClientConfig {
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    match origin.as_deref().map(ClientConfig::new) {
        Some(Ok(config)) => config,
        _ => {
            web_sys::console::warn_1(
                &format!("[APP] Could not use page origin {:?}, falling back to {}", origin, DEFAULT_API_URL).into(),
            );
            ClientConfig::new(DEFAULT_API_URL).expect("default API URL is valid")
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = HttpRecipeApi::new(api_config());
    web_sys::console::log_1(&format!("[APP] Using recipe API at {}", api.config().base_url()).into());
    let ctx = AppContext::new(store, api);
    provide_context(ctx);

    // Load the collection once on mount
    let api = ctx.api();
    spawn_local(async move {
        let result = api.list().await;
        match ctx.settle(move |book| book.finish_load(result)) {
            Ok(count) => {
                web_sys::console::log_1(&format!("[APP] Loaded {} recipes", count).into());
            }
            Err(e) => log_failure("APP", "Load", &e),
        }
    });

    // Only switch screens when the view actually changes, so forms keep focus
    let current_view = Memo::new(move |_| store.book().read().view());

    view! {
        <div class="recipe-app">
            <Header />
            {move || match current_view.get() {
                Screen::NewRecipeForm => view! { <NewRecipeForm /> }.into_any(),
                Screen::RecipeDetail => view! { <RecipeFull /> }.into_any(),
                Screen::RecipeList => view! { <RecipeList /> }.into_any(),
            }}
            <ToastContainer />
        </div>
    }
}
