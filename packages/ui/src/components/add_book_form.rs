use api::BookForm;
use catalog::Book;
use dioxus::prelude::*;

use super::{Button, ButtonVariant, FormField, Input};
use crate::context::use_api;
use crate::notifications::use_notifier;

/// Librarian "Add New Book" form. Calls `on_added` with the created book when
/// the service echoes it back.
#[component]
pub fn AddBookForm(on_added: Option<EventHandler<Book>>) -> Element {
    let api = use_api();
    let notifier = use_notifier();
    let mut form = use_signal(BookForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let book = match form.read().validate() {
                Ok(book) => book,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            saving.set(true);
            match api.create_book(&book).await {
                Ok(created) => {
                    let title = created
                        .as_ref()
                        .map(|b| b.title.clone())
                        .unwrap_or_else(|| book.title.clone());
                    notifier.success(format!("Book \"{title}\" added successfully!"));
                    form.set(BookForm::default());
                    if let (Some(created), Some(handler)) = (created, on_added) {
                        handler.call(created);
                    }
                }
                Err(e) => {
                    tracing::error!("failed to add book: {e}");
                    error.set(Some("Error adding book".to_string()));
                }
            }
            saving.set(false);
        });
    };

    let current = form();

    rsx! {
        div {
            class: "form-container",
            h2 { "Add New Book" }
            form {
                onsubmit: handle_submit,
                if let Some(err) = error() {
                    div { class: "error-message", role: "alert", "{err}" }
                }
                FormField {
                    label: "Title",
                    id: "book-title",
                    Input {
                        id: "book-title",
                        value: current.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().title = evt.value(),
                    }
                }
                FormField {
                    label: "Author",
                    id: "book-author",
                    Input {
                        id: "book-author",
                        value: current.author.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().author = evt.value(),
                    }
                }
                FormField {
                    label: "Genre",
                    id: "book-genre",
                    Input {
                        id: "book-genre",
                        value: current.genre.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().genre = evt.value(),
                    }
                }
                FormField {
                    label: "Published Date",
                    id: "book-published",
                    Input {
                        id: "book-published",
                        r#type: "date",
                        value: current.published_date.clone(),
                        oninput: move |evt: FormEvent| form.write().published_date = evt.value(),
                    }
                }
                FormField {
                    label: "Description",
                    id: "book-description",
                    textarea {
                        id: "book-description",
                        class: "input",
                        rows: "3",
                        value: "{current.description}",
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                }
                FormField {
                    label: "Image URL",
                    id: "book-image",
                    Input {
                        id: "book-image",
                        r#type: "url",
                        value: current.image_url.clone(),
                        oninput: move |evt: FormEvent| form.write().image_url = evt.value(),
                    }
                }
                FormField {
                    label: "PDF URL",
                    id: "book-pdf",
                    Input {
                        id: "book-pdf",
                        r#type: "url",
                        value: current.pdf_url.clone(),
                        oninput: move |evt: FormEvent| form.write().pdf_url = evt.value(),
                    }
                }
                FormField {
                    label: "Available Copies",
                    id: "book-available",
                    Input {
                        id: "book-available",
                        r#type: "number",
                        placeholder: "Enter number of available copies",
                        value: current.available.clone(),
                        oninput: move |evt: FormEvent| form.write().available = evt.value(),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Adding..." } else { "Add Book" }
                }
            }
        }
    }
}
