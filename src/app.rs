//! Bookmark Panel App
//!
//! Two independent panels: adding a bookmark and switching the active
//! bookmark config. They share nothing but the context handles.

use leptos::prelude::*;

use crate::components::{AddBookmarkForm, ConfigSwitcher};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::notify;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    notify::log(&format!("[APP] API base: '{}'", config.base_url()));
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Bookmarks"</h1>
                <AddBookmarkForm />
            </main>
            <aside class="config-column">
                <h2>"Config Files"</h2>
                <ConfigSwitcher />
            </aside>
        </div>
    }
}
