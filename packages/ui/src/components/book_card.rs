use catalog::{Book, PLACEHOLDER_COVER};
use dioxus::prelude::*;

/// Cover image that swaps to the placeholder if the URL fails to load.
#[component]
pub fn BookCover(#[props(into)] src: String, #[props(into)] alt: String) -> Element {
    let mut broken = use_signal(|| false);
    let src = if broken() { PLACEHOLDER_COVER.to_string() } else { src };

    rsx! {
        img {
            class: "book-cover",
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            onerror: move |_| broken.set(true),
        }
    }
}

/// Gallery tile. Without `on_borrow` the card is read-only.
#[component]
pub fn BookCard(
    book: Book,
    #[props(default)] pending: bool,
    on_borrow: Option<EventHandler<Book>>,
) -> Element {
    let genre = book.genre_name().map(str::to_string);
    let borrowed = book.is_borrowed;
    let for_borrow = book.clone();

    rsx! {
        div {
            class: if borrowed { "book-card borrowed" } else { "book-card" },
            BookCover { src: book.cover_url(), alt: book.title.clone() }
            div {
                class: "book-info",
                h3 { class: "book-title", "{book.title}" }
                p { class: "book-author", "by {book.author}" }
                if let Some(genre) = genre {
                    span { class: "book-genre", "{genre}" }
                }
                if let Some(available) = book.available {
                    p { class: "book-available", "Available: {available}" }
                }
            }
            div {
                class: "book-actions",
                a {
                    class: "btn btn-secondary",
                    href: "{book.pdf_href()}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Read PDF"
                }
                if let Some(handler) = on_borrow {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: pending || borrowed,
                        onclick: move |_| handler.call(for_borrow.clone()),
                        if borrowed {
                            "Borrowed"
                        } else if pending {
                            "Borrowing..."
                        } else {
                            "Borrow"
                        }
                    }
                }
            }
        }
    }
}
