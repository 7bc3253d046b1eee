//! Search / sort / page controls shared by every list screen.
//!
//! [`use_list_controls`] owns a [`ListState`] plus the raw search box value.
//! Keystrokes update the box immediately; the query reaches the list state
//! only once typing has paused for `search_debounce_ms`.

use catalog::{Debounced, ListState, PageWindow, SortKey};
use dioxus::prelude::*;

use crate::context::use_config;
use crate::icons;
use crate::timer::sleep_ms;
use crate::Icon;

#[derive(Clone, Copy, PartialEq)]
pub struct ListControls<K: SortKey> {
    pub state: Signal<ListState<K>>,
    /// What is in the search box right now, ahead of the debounce.
    pub input: Signal<String>,
    debounce: Signal<Debounced<String>>,
    delay_ms: u64,
}

pub fn use_list_controls<K: SortKey>() -> ListControls<K> {
    let config = use_config();
    let state = use_signal(|| ListState::new(config.page_size()));
    let input = use_signal(String::new);
    let debounce = use_signal(|| Debounced::new(String::new()));
    ListControls {
        state,
        input,
        debounce,
        delay_ms: config.list.search_debounce_ms,
    }
}

impl<K: SortKey> ListControls<K> {
    pub fn search_input(self, value: String) {
        let Self {
            mut state,
            mut input,
            mut debounce,
            delay_ms,
        } = self;
        input.set(value.clone());
        let ticket = debounce.write().input(value);
        spawn(async move {
            sleep_ms(delay_ms).await;
            let settled = debounce.write().settle(ticket);
            if let Some(query) = settled {
                state.write().set_search(query);
            }
        });
    }

    /// Clearing skips the debounce.
    pub fn clear_search(self) {
        let Self {
            mut state,
            mut input,
            mut debounce,
            ..
        } = self;
        input.set(String::new());
        debounce.write().reset(String::new());
        state.write().set_search("");
    }

    pub fn set_sort(self, key: K) {
        let mut state = self.state;
        state.write().set_sort(key);
    }

    pub fn toggle_direction(self) {
        let mut state = self.state;
        state.write().toggle_direction();
    }

    pub fn go_to(self, page: usize) {
        let mut state = self.state;
        state.write().go_to(page);
    }

    pub fn reset(self) {
        let Self {
            mut state,
            mut input,
            mut debounce,
            ..
        } = self;
        input.set(String::new());
        debounce.write().reset(String::new());
        state.write().reset();
    }
}

/// Search box with a clear button, sort key select, direction toggle, and a
/// Reset button that only appears once something differs from the defaults.
#[component]
pub fn ListToolbar<K: SortKey>(
    controls: ListControls<K>,
    #[props(default = "Search...".to_string(), into)] placeholder: String,
) -> Element {
    let search = (controls.input)();
    let state = controls.state.read().clone();
    let current = state.sort();
    let direction = state.direction();
    let show_reset = state.is_customized() || !search.is_empty();

    rsx! {
        div {
            class: "list-toolbar",
            div {
                class: "search-box",
                Icon { icon: icons::FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    aria_label: "{placeholder}",
                    value: "{search}",
                    oninput: move |evt: FormEvent| controls.search_input(evt.value()),
                }
                if !search.is_empty() {
                    button {
                        class: "search-clear",
                        r#type: "button",
                        title: "Clear search",
                        onclick: move |_| controls.clear_search(),
                        "×"
                    }
                }
            }
            select {
                class: "sort-select",
                aria_label: "Sort by",
                value: current.as_str(),
                onchange: move |evt: FormEvent| {
                    if let Some(key) = K::parse(&evt.value()) {
                        controls.set_sort(key);
                    }
                },
                for key in K::ALL.iter().copied() {
                    option {
                        key: "{key.as_str()}",
                        value: key.as_str(),
                        selected: key == current,
                        "{key.label()}"
                    }
                }
            }
            button {
                class: "sort-direction",
                r#type: "button",
                title: "Sort {direction.label()}",
                onclick: move |_| controls.toggle_direction(),
                "{direction.arrow()}"
            }
            if show_reset {
                button {
                    class: "list-reset",
                    r#type: "button",
                    onclick: move |_| controls.reset(),
                    "Reset"
                }
            }
        }
    }
}

/// "Showing 11–12 of 12 books"
#[component]
pub fn ListSummary(window: PageWindow, matched: usize, noun: &'static str) -> Element {
    if matched == 0 {
        return rsx! {};
    }
    let first = window.start + 1;
    let last = window.end;
    rsx! {
        p { class: "list-summary", "Showing {first}–{last} of {matched} {noun}" }
    }
}

#[component]
pub fn Pagination(window: PageWindow, on_page: EventHandler<usize>) -> Element {
    if window.total_pages <= 1 {
        return rsx! {};
    }
    let page = window.page;

    rsx! {
        nav {
            class: "pagination",
            aria_label: "Pagination",
            button {
                r#type: "button",
                disabled: !window.has_prev(),
                onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            for n in 1..=window.total_pages {
                button {
                    key: "{n}",
                    r#type: "button",
                    class: if n == page { "page-number active" } else { "page-number" },
                    onclick: move |_| on_page.call(n),
                    "{n}"
                }
            }
            button {
                r#type: "button",
                disabled: !window.has_next(),
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}
