//! Fetch-once collections and the optimistic actions that patch them.

use std::future::Future;

use api::{ApiClient, ApiError};
use catalog::{Book, Collection, Keyed, NewBorrow};
use dioxus::prelude::*;

use crate::context::{use_api, use_session};
use crate::notifications::use_notifier;
use crate::timer::today;

/// Borrows made without a signed-in user id are recorded against this account.
pub const FALLBACK_USER_ID: i64 = 1;

/// Load a collection once on mount. `what` names it in the error message
/// ("Failed to load {what}. Please try again.").
pub fn use_collection<T, F, Fut>(what: &'static str, fetch: F) -> Signal<Collection<T>>
where
    T: Keyed + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let api = use_api();
    let mut collection = use_signal(Collection::new);

    use_hook(move || {
        spawn(async move {
            match fetch(api).await {
                Ok(items) => {
                    tracing::debug!("loaded {} {what}", items.len());
                    collection.write().loaded(items);
                }
                Err(e) => {
                    tracing::error!("failed to load {what}: {e}");
                    collection
                        .write()
                        .failed(format!("Failed to load {what}. Please try again."));
                }
            }
        });
    });

    collection
}

pub fn use_books() -> Signal<Collection<Book>> {
    use_collection("books", |api| async move { api.list_books().await })
}

/// Borrow a book for the signed-in user. The row is marked pending while the
/// request is in flight and flagged as borrowed once it succeeds.
pub fn use_borrow(books: Signal<Collection<Book>>) -> Callback<Book> {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();

    use_callback(move |book: Book| {
        let api = api.clone();
        let mut books = books;
        let user_id = session
            .read()
            .as_ref()
            .and_then(|s| s.user_id)
            .unwrap_or(FALLBACK_USER_ID);
        spawn(async move {
            books.write().begin_action(book.id);
            let request = NewBorrow::new(user_id, book.id, today());
            match api.create_borrow(&request).await {
                Ok(()) => {
                    books.write().patch(book.id, |b| b.is_borrowed = true);
                    notifier.success("Book borrowed successfully!");
                }
                Err(e) => {
                    tracing::error!("failed to borrow book {}: {e}", book.id);
                    notifier.error("Failed to borrow book. Please try again.");
                }
            }
            books.write().end_action(book.id);
        });
    })
}
