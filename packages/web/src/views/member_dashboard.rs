//! Member home: a search box, a handful of recommended books, then
//! everything that matches.

use catalog::{Book, BookSort, Listable};
use dioxus::prelude::*;
use ui::components::BookCard;
use ui::{use_books, use_config, use_list_controls};

use super::Loading;

#[component]
pub fn MemberDashboard() -> Element {
    let recommended_count = use_config().list.recommended_count;
    let books = use_books();
    let controls = use_list_controls::<BookSort>();

    let query = controls.state.read().search().to_string();
    let collection = books.read();
    let matching: Vec<Book> = collection
        .items()
        .iter()
        .filter(|book| book.matches(&query))
        .cloned()
        .collect();
    let recommended: Vec<Book> = matching.iter().take(recommended_count).cloned().collect();
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    drop(collection);

    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "search",
                class: "input",
                placeholder: "Search books, authors...",
                value: "{controls.input}",
                oninput: move |evt: FormEvent| controls.search_input(evt.value()),
            }
        }

        div {
            class: "content-container",
            h2 { class: "page-title", "Welcome to the Library Dashboard" }

            if let Some(err) = error {
                div { class: "error-message", "{err}" }
            }

            h3 { class: "section-title", "Recommended Books" }
            if loading {
                Loading { label: "Loading books..." }
            } else if recommended.is_empty() {
                div { class: "no-results", "No recommended books found." }
            } else {
                div {
                    class: "book-grid",
                    for book in recommended {
                        BookCard { key: "rec-{book.id}", book }
                    }
                }
            }

            h3 { class: "section-title", "All Books" }
            if loading {
                Loading { label: "Loading books..." }
            } else if matching.is_empty() {
                div { class: "no-results", "No books found." }
            } else {
                div {
                    class: "book-grid",
                    for book in matching {
                        BookCard { key: "{book.id}", book }
                    }
                }
            }
        }
    }
}
