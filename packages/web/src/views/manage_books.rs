//! Librarian book table: the full list pipeline plus borrowing.

use catalog::BookSort;
use dioxus::prelude::*;
use ui::components::BookCover;
use ui::{use_books, use_borrow, use_list_controls, ListSummary, ListToolbar, Pagination};

use super::Loading;

#[component]
pub fn ManageBooks() -> Element {
    let books = use_books();
    let borrow = use_borrow(books);
    let controls = use_list_controls::<BookSort>();

    let collection = books.read();
    let view = controls.state.read().apply(collection.items());
    let rows: Vec<_> = view
        .rows
        .iter()
        .map(|book| ((*book).clone(), collection.is_pending(book.id)))
        .collect();
    let (matched, window) = (view.matched, view.window);
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    drop(collection);

    rsx! {
        div {
            class: "content-container",
            h2 { class: "page-title", "Manage Books" }

            ListToolbar { controls, placeholder: "Search by title or author..." }

            if let Some(err) = error {
                div { class: "error-message", role: "alert", "{err}" }
            }

            if loading {
                Loading { label: "Loading books..." }
            } else if rows.is_empty() {
                div { class: "no-results", "No books match your search." }
            } else {
                ListSummary { window, matched, noun: "books" }
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Cover" }
                            th { "Title" }
                            th { "Author" }
                            th { "Genre" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (book, pending) in rows {
                            tr {
                                key: "{book.id}",
                                td {
                                    class: "cover-cell",
                                    BookCover { src: book.cover_url(), alt: book.title.clone() }
                                }
                                td { "{book.title}" }
                                td { "{book.author}" }
                                td { "{book.genre_name().unwrap_or_default()}" }
                                td {
                                    if book.is_borrowed {
                                        span { class: "status borrowed", "Borrowed" }
                                    } else {
                                        span { class: "status available", "Available" }
                                    }
                                }
                                td {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        disabled: pending || book.is_borrowed,
                                        onclick: {
                                            let book = book.clone();
                                            move |_| borrow.call(book.clone())
                                        },
                                        if pending { "Borrowing..." } else { "Borrow" }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { window, on_page: move |page| controls.go_to(page) }
            }
        }
    }
}
