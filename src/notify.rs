//! User Notices and Console Logging
//!
//! `Notifier` is how the submit flows talk to the user. The browser
//! implementation is a blocking `alert()`.

/// Surfaces a one-line message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert()`
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    error(&format!("[Notify] alert failed: {:?}", e));
                }
            }
            None => warn(&format!("[Notify] no window, dropped: {}", message)),
        }
    }
}

// Console output; on a native host (unit tests) it goes to stderr instead

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    eprintln!("WARN {}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(message: &str) {
    eprintln!("ERROR {}", message);
}
