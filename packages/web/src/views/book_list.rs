//! Browse the whole catalog: search, sort, page, borrow.

use catalog::BookSort;
use dioxus::prelude::*;
use ui::components::BookCard;
use ui::{use_books, use_borrow, use_list_controls, ListSummary, ListToolbar, Pagination};

use super::Loading;

#[component]
pub fn Catalog() -> Element {
    let books = use_books();
    let borrow = use_borrow(books);
    let controls = use_list_controls::<BookSort>();

    let collection = books.read();
    let view = controls.state.read().apply(collection.items());
    let rows = view.cloned_rows();
    let (matched, window) = (view.matched, view.window);
    let pending: Vec<bool> = rows.iter().map(|b| collection.is_pending(b.id)).collect();
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    drop(collection);

    rsx! {
        div {
            class: "content-container",
            h2 { class: "page-title", "Book Catalog" }

            ListToolbar { controls, placeholder: "Search by title or author..." }

            if let Some(err) = error {
                div { class: "error-message", role: "alert", "{err}" }
            }

            if loading {
                Loading { label: "Loading books..." }
            } else if rows.is_empty() {
                div { class: "no-results", "No books found." }
            } else {
                ListSummary { window, matched, noun: "books" }
                div {
                    class: "book-grid",
                    for (book, pending) in rows.into_iter().zip(pending) {
                        BookCard {
                            key: "{book.id}",
                            book,
                            pending,
                            on_borrow: borrow,
                        }
                    }
                }
                Pagination { window, on_page: move |page| controls.go_to(page) }
            }
        }
    }
}
