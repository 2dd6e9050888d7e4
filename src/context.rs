//! Application Context
//!
//! Handles provided once at startup via Leptos Context API, so widgets
//! receive their collaborators instead of looking them up.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpClient;
use crate::config::ApiConfig;
use crate::notify::{AlertNotifier, Notifier};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Client for the bookmark server
    pub client: HttpClient,
    /// Where user-facing notices go
    pub notifier: Arc<dyn Notifier + Send + Sync>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: HttpClient::new(config),
            notifier: Arc::new(AlertNotifier),
        }
    }
}

/// Get the app context; panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
