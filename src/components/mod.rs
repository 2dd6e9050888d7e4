//! UI Components
//!
//! Leptos components making up the panel.

mod add_bookmark_form;
mod config_switcher;
mod text_field;

pub use add_bookmark_form::AddBookmarkForm;
pub use config_switcher::ConfigSwitcher;
pub use text_field::TextField;
