//! Config Switcher Component
//!
//! Pick a config file from the server, preview it, and make it active.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_lazy_select::{LazySelect, RefreshGuard};

use crate::api::ConfigApi;
use crate::context::use_app_context;
use crate::models::ConfigFile;
use crate::notify;
use crate::submit::{switch_config_file, SubmitOutcome};

#[component]
pub fn ConfigSwitcher() -> impl IntoView {
    let ctx = use_app_context();

    let (selected, set_selected) = signal(String::new());
    let (active, set_active) = signal(None::<ConfigFile>);
    let (preview, set_preview) = signal(None::<String>);
    // Bumped after a successful switch to reload the active config
    let (active_version, set_active_version) = signal(0u32);

    let client = ctx.client.clone();
    let load_files = move || {
        let client = client.clone();
        async move {
            client
                .list_config_files()
                .await
                .map(|files| files.into_iter().map(|f| f.name).collect())
                .map_err(|e| e.to_string())
        }
    };

    // Active config on mount and after each switch
    let client = ctx.client.clone();
    Effect::new(move |_| {
        let version = active_version.get();
        let client = client.clone();
        spawn_local(async move {
            match client.active_config().await {
                Ok(config) => {
                    notify::log(&format!("[ConfigSwitcher] Active config (v{}): {:?}", version, config.as_ref().map(|c| &c.name)));
                    set_active.set(config);
                }
                Err(e) => notify::error(&format!("[ConfigSwitcher] Error loading active config: {}", e)),
            }
        });
    });

    // Preview follows the selection; only the latest request may land
    let client = ctx.client.clone();
    let preview_guard = RefreshGuard::default();
    Effect::new(move |_| {
        let file_name = selected.get();
        let token = preview_guard.begin();
        if file_name.is_empty() {
            set_preview.set(None);
            return;
        }
        let client = client.clone();
        let guard = preview_guard.clone();
        spawn_local(async move {
            let result = client.config_content(&file_name).await;
            if !guard.is_current(token) {
                return;
            }
            match result {
                Ok(text) => set_preview.set(Some(text)),
                Err(e) => {
                    notify::error(&format!("[ConfigSwitcher] Error loading {}: {}", file_name, e));
                    set_preview.set(None);
                }
            }
        });
    });

    let client = ctx.client.clone();
    let notifier = ctx.notifier.clone();
    let on_switch = move |_| {
        let file_name = selected.get_untracked();
        let client = client.clone();
        let notifier = notifier.clone();
        spawn_local(async move {
            if let SubmitOutcome::Answered(reply) = switch_config_file(&client, notifier.as_ref(), &file_name).await {
                if reply.is_success() {
                    set_active_version.update(|v| *v += 1);
                }
            }
        });
    };

    view! {
        <div class="config-switcher">
            <p class="active-config">
                "Active: "
                {move || match active.get() {
                    Some(config) => config.summary(),
                    None => "none".to_string(),
                }}
            </p>
            <div class="config-select-row">
                <LazySelect
                    id="configSelect"
                    placeholder="Select a config file..."
                    loader=load_files
                    value=selected
                    set_value=set_selected
                />
                <button type="button" on:click=on_switch>"Switch"</button>
            </div>
            <Show when=move || preview.get().is_some()>
                <pre class="config-preview">{move || preview.get().unwrap_or_default()}</pre>
            </Show>
        </div>
    }
}
