use catalog::BorrowRecord;
use dioxus::prelude::*;
use ui::use_collection;

use super::my_books::{date_or_dash, return_label};
use super::Loading;

#[component]
pub fn Borrows() -> Element {
    let borrows = use_collection("borrow records", |api| async move { api.list_borrows().await });

    let collection = borrows.read();
    let records: Vec<BorrowRecord> = collection.items().to_vec();
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    drop(collection);

    rsx! {
        div {
            class: "content-container",
            h2 { class: "page-title", "Borrow Records" }

            if let Some(err) = error {
                div { class: "error-message", role: "alert", "{err}" }
            }

            if loading {
                Loading { label: "Loading borrow records..." }
            } else if records.is_empty() {
                div { class: "no-results", "No borrow records found." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "User" }
                            th { "Book" }
                            th { "Borrow Date" }
                            th { "Return Date" }
                        }
                    }
                    tbody {
                        for (i, record) in records.into_iter().enumerate() {
                            tr {
                                key: "{i}",
                                td { "{record.id.map(|id| id.to_string()).unwrap_or_default()}" }
                                td { "{record.borrower_name()}" }
                                td { "{record.book_title()}" }
                                td { "{date_or_dash(record.borrow_date)}" }
                                td {
                                    class: if record.is_returned() { "" } else { "not-returned" },
                                    "{return_label(record.return_date)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
