//! Add Bookmark Form Component
//!
//! Group dropdown (refreshed from the server when opened), a free-text
//! fallback group, and the bookmark fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_lazy_select::LazySelect;

use crate::api::BookmarkApi;
use crate::components::TextField;
use crate::context::use_app_context;
use crate::submit::{submit_bookmark, BookmarkForm};

/// Form for adding one bookmark to a new or existing group
#[component]
pub fn AddBookmarkForm() -> impl IntoView {
    let ctx = use_app_context();

    let (group, set_group) = signal(String::new());
    let (new_group, set_new_group) = signal(String::new());
    let (service_name, set_service_name) = signal(String::new());
    let (abbr, set_abbr) = signal(String::new());
    let (url, set_url) = signal(String::new());

    let client = ctx.client.clone();
    let load_groups = move || {
        let client = client.clone();
        async move { client.list_groups().await.map_err(|e| e.to_string()) }
    };

    let notifier = ctx.notifier.clone();
    let on_load_error = Callback::new(move |e: String| {
        notifier.notify(&format!("Failed to load bookmark groups, please try again later. ({})", e));
    });

    let client = ctx.client.clone();
    let notifier = ctx.notifier.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = BookmarkForm {
            selected_group: group.get_untracked(),
            new_group_name: new_group.get_untracked(),
            service_name: service_name.get_untracked(),
            abbr: abbr.get_untracked(),
            url: url.get_untracked(),
        };
        let client = client.clone();
        let notifier = notifier.clone();
        spawn_local(async move {
            submit_bookmark(&client, notifier.as_ref(), &form).await;
        });
    };

    view! {
        <form id="addBookmarkForm" class="add-bookmark-form" on:submit=on_submit>
            <div class="form-row">
                <label for="group_name">"Group"</label>
                <LazySelect
                    id="group_name"
                    placeholder="Select a group..."
                    loader=load_groups
                    value=group
                    set_value=set_group
                    on_error=on_load_error
                />
            </div>
            <TextField
                id="new_group_name"
                label="Or new group"
                placeholder="New group name"
                value=new_group
                set_value=set_new_group
            />
            <TextField id="service_name" label="Service" placeholder="GitHub" value=service_name set_value=set_service_name />
            <TextField id="abbr" label="Abbreviation" placeholder="GH" value=abbr set_value=set_abbr />
            <TextField id="url" label="URL" placeholder="https://" value=url set_value=set_url />
            <button type="submit">"Add Bookmark"</button>
        </form>
    }
}
