//! Loans belonging to the signed-in member.

use catalog::BorrowRecord;
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::{use_collection, use_session, FALLBACK_USER_ID};

use super::Loading;

#[component]
pub fn MyBooks() -> Element {
    let session = use_session();
    let borrows = use_collection("borrow records", |api| async move { api.list_borrows().await });

    let user_id = session
        .read()
        .as_ref()
        .and_then(|s| s.user_id)
        .unwrap_or(FALLBACK_USER_ID);
    let collection = borrows.read();
    let mine: Vec<BorrowRecord> = collection
        .items()
        .iter()
        .filter(|record| record.borrower_id() == Some(user_id))
        .cloned()
        .collect();
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    drop(collection);

    rsx! {
        div {
            class: "content-container",
            h2 { class: "page-title", "My Books" }

            if let Some(err) = error {
                div { class: "error-message", role: "alert", "{err}" }
            }

            if loading {
                Loading { label: "Loading your books..." }
            } else if mine.is_empty() {
                div { class: "no-results", "You haven't borrowed any books yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Book" }
                            th { "Borrowed" }
                            th { "Returned" }
                        }
                    }
                    tbody {
                        for (i, record) in mine.into_iter().enumerate() {
                            tr {
                                key: "{i}",
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

pub(super) fn date_or_dash(date: Option<NaiveDate>) -> String {
    date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub(super) fn return_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "Not Returned".to_string(),
    }
}
