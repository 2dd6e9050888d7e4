//! Leptos Lazy Select
//!
//! A `<select>` that pulls its options from a loader whenever the user
//! focuses it or clicks it open. The first (placeholder) option is fixed;
//! everything after it is replaced wholesale on each successful load.
//! Overlapping loads are resolved with a request token so only the most
//! recently started one may touch the list.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// One `<option>` of the select
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value and visible label are both `name`
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            label: name,
        }
    }
}

/// Options of a select: a fixed placeholder followed by loaded items
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionList {
    placeholder: SelectOption,
    items: Vec<SelectOption>,
}

impl OptionList {
    pub fn new(placeholder: SelectOption) -> Self {
        Self {
            placeholder,
            items: Vec::new(),
        }
    }

    pub fn placeholder(&self) -> &SelectOption {
        &self.placeholder
    }

    pub fn items(&self) -> &[SelectOption] {
        &self.items
    }

    /// Number of rendered options, placeholder included
    pub fn option_count(&self) -> usize {
        1 + self.items.len()
    }

    /// All options in render order, placeholder first
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        std::iter::once(&self.placeholder).chain(self.items.iter())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|opt| opt.value == value)
    }

    /// Drop every loaded option and append one per name, in the given order.
    /// No dedupe, no sorting.
    pub fn replace_items<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = names.into_iter().map(SelectOption::named).collect();
    }
}

/// Token handed out when a load starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Hands out increasing request tokens; only the newest one is current.
///
/// Cloning shares the counter, so a clone moved into an async task sees
/// loads started after it.
#[derive(Clone, Debug, Default)]
pub struct RefreshGuard {
    latest: Arc<AtomicU64>,
}

impl RefreshGuard {
    /// Start a new load, invalidating every earlier token
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// What happened to the option list when a load finished
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Items replaced
    Applied {
        /// New item count, placeholder excluded
        count: usize,
        /// Whether the selected value is still among the options
        selection_kept: bool,
    },
    /// A newer load was started; result discarded
    Stale,
    /// Loader failed; list left as it was
    Failed(String),
}

/// Apply a finished load to `list`, given the currently `selected` value.
///
/// Stale results are dropped before looking at them, so a late error from a
/// superseded load is not reported either. When the selected option is gone
/// the select falls back to the placeholder, and the caller must clear its
/// value to match.
pub fn apply_refresh<E: ToString>(
    guard: &RefreshGuard,
    token: RequestToken,
    result: Result<Vec<String>, E>,
    selected: &str,
    list: &mut OptionList,
) -> RefreshOutcome {
    if !guard.is_current(token) {
        return RefreshOutcome::Stale;
    }
    match result {
        Ok(names) => {
            let count = names.len();
            list.replace_items(names);
            RefreshOutcome::Applied {
                count,
                selection_kept: selected.is_empty() || list.contains(selected),
            }
        }
        Err(e) => RefreshOutcome::Failed(e.to_string()),
    }
}

/// A click refreshes only while the select is collapsed.
///
/// `size` reads 0 when the attribute is absent, which renders the same as 1.
pub fn should_refresh_on_click(visible_rows: u32) -> bool {
    visible_rows <= 1
}

/// `<select>` refreshed from `loader` on focus and on click-to-expand
///
/// # Arguments
/// * `id` - DOM id of the select
/// * `placeholder` - label of the fixed first option (value is empty)
/// * `loader` - fetches the item names; `Err` is logged and the list kept
/// * `value` / `set_value` - currently selected value ("" = placeholder)
/// * `on_error` - optional hook for surfacing load failures to the user
#[component]
pub fn LazySelect<L, Fut>(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    loader: L,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
) -> impl IntoView
where
    L: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, String>> + 'static,
{
    let placeholder = SelectOption::new("", placeholder);
    let (options, set_options) = signal(OptionList::new(placeholder.clone()));
    let guard = RefreshGuard::default();
    let log_prefix = format!("[LazySelect#{}]", id);

    let refresh = move || {
        let token = guard.begin();
        let guard = guard.clone();
        let loader = loader.clone();
        let log_prefix = log_prefix.clone();
        spawn_local(async move {
            let result = loader().await;
            // Component may be gone by the time the response lands
            let Some(mut list) = options.try_get_untracked() else {
                return;
            };
            let selected = value.try_get_untracked().unwrap_or_default();
            match apply_refresh(&guard, token, result, &selected, &mut list) {
                RefreshOutcome::Applied { count, selection_kept } => {
                    web_sys::console::log_1(&format!("{} Loaded {} options", log_prefix, count).into());
                    set_options.set(list);
                    if !selection_kept {
                        web_sys::console::log_1(&format!("{} '{}' no longer listed, selection cleared", log_prefix, selected).into());
                        set_value.set(String::new());
                    }
                }
                RefreshOutcome::Stale => {
                    web_sys::console::log_1(&format!("{} Dropped stale response", log_prefix).into());
                }
                RefreshOutcome::Failed(e) => {
                    web_sys::console::error_1(&format!("{} Load failed: {}", log_prefix, e).into());
                    if let Some(cb) = on_error {
                        cb.run(e);
                    }
                }
            }
        });
    };

    let refresh_on_focus = refresh.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        let rows = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .map(|select| select.size())
            .unwrap_or(1);
        if should_refresh_on_click(rows) {
            refresh();
        }
    };

    view! {
        <select
            id=id
            on:focus=move |_| refresh_on_focus()
            on:click=on_click
            on:change=move |ev| set_value.set(event_target_value(&ev))
        >
            <option value=placeholder.value prop:selected=move || value.get().is_empty()>
                {placeholder.label}
            </option>
            {move || options.get().items().iter().cloned().map(|opt| {
                let current = opt.value.clone();
                view! {
                    <option value=opt.value prop:selected=move || value.get() == current>
                        {opt.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_placeholder() -> OptionList {
        OptionList::new(SelectOption::new("", "Select a group..."))
    }

    #[test]
    fn test_replace_keeps_placeholder_and_order() {
        let mut list = list_with_placeholder();
        list.replace_items(vec!["Work", "Personal"]);

        assert_eq!(list.option_count(), 3);
        let opts: Vec<_> = list.options().collect();
        assert_eq!(opts[0], &SelectOption::new("", "Select a group..."));
        assert_eq!(opts[1], &SelectOption::named("Work"));
        assert_eq!(opts[2], &SelectOption::named("Personal"));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut list = list_with_placeholder();
        list.replace_items(vec!["Old", "Stale"]);
        list.replace_items(vec!["New"]);

        assert_eq!(list.option_count(), 2);
        assert!(list.contains("New"));
        assert!(!list.contains("Old"));
        assert_eq!(list.placeholder().label, "Select a group...");
    }

    #[test]
    fn test_replace_keeps_duplicates() {
        let mut list = list_with_placeholder();
        list.replace_items(vec!["A", "A", "B"]);
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn test_replace_with_nothing_leaves_placeholder() {
        let mut list = list_with_placeholder();
        list.replace_items(vec!["A"]);
        list.replace_items(Vec::<String>::new());
        assert_eq!(list.option_count(), 1);
    }

    #[test]
    fn test_newer_token_invalidates_older() {
        let guard = RefreshGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_cloned_guard_shares_counter() {
        let guard = RefreshGuard::default();
        let token = guard.begin();
        let moved = guard.clone();
        guard.begin();
        assert!(!moved.is_current(token));
    }

    #[test]
    fn test_apply_success_replaces_items() {
        let guard = RefreshGuard::default();
        let token = guard.begin();
        let mut list = list_with_placeholder();

        let outcome = apply_refresh::<String>(&guard, token, Ok(vec!["Work".into(), "Personal".into()]), "", &mut list);

        assert_eq!(outcome, RefreshOutcome::Applied { count: 2, selection_kept: true });
        assert_eq!(list.option_count(), 3);
    }

    #[test]
    fn test_apply_failure_leaves_list_untouched() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();
        list.replace_items(vec!["Keep"]);
        let before = list.clone();

        let token = guard.begin();
        let outcome = apply_refresh(&guard, token, Err("data is not a list"), "Keep", &mut list);

        assert_eq!(outcome, RefreshOutcome::Failed("data is not a list".to_string()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_out_of_order_responses_keep_latest() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();

        let slow = guard.begin();
        let fast = guard.begin();

        // Newer request resolves first
        let outcome = apply_refresh::<String>(&guard, fast, Ok(vec!["Fresh".into()]), "", &mut list);
        assert_eq!(outcome, RefreshOutcome::Applied { count: 1, selection_kept: true });

        // Older one arrives late and must not overwrite
        let outcome = apply_refresh::<String>(&guard, slow, Ok(vec!["Old".into(), "Older".into()]), "", &mut list);
        assert_eq!(outcome, RefreshOutcome::Stale);
        assert_eq!(list.items(), &[SelectOption::named("Fresh")]);
    }

    #[test]
    fn test_stale_error_is_not_reported() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();
        let old = guard.begin();
        guard.begin();

        let outcome = apply_refresh(&guard, old, Err("timeout"), "", &mut list);
        assert_eq!(outcome, RefreshOutcome::Stale);
    }

    #[test]
    fn test_selection_dropped_when_option_removed() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();
        list.replace_items(vec!["Work", "Personal"]);

        let token = guard.begin();
        let outcome = apply_refresh::<String>(&guard, token, Ok(vec!["Personal".into()]), "Work", &mut list);

        assert_eq!(outcome, RefreshOutcome::Applied { count: 1, selection_kept: false });
        assert!(!list.contains("Work"));
    }

    #[test]
    fn test_selection_kept_when_option_survives() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();

        let token = guard.begin();
        let outcome = apply_refresh::<String>(&guard, token, Ok(vec!["Reading".into(), "Work".into()]), "Work", &mut list);

        assert_eq!(outcome, RefreshOutcome::Applied { count: 2, selection_kept: true });
    }

    #[test]
    fn test_placeholder_selection_always_kept() {
        let guard = RefreshGuard::default();
        let mut list = list_with_placeholder();

        let token = guard.begin();
        let outcome = apply_refresh::<String>(&guard, token, Ok(vec![]), "", &mut list);

        assert_eq!(outcome, RefreshOutcome::Applied { count: 0, selection_kept: true });
    }

    #[test]
    fn test_click_refresh_only_when_collapsed() {
        assert!(should_refresh_on_click(0));
        assert!(should_refresh_on_click(1));
        assert!(!should_refresh_on_click(5));
    }
}
