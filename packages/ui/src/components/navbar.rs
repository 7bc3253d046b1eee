use dioxus::prelude::*;

use crate::context::use_session;

/// Top bar: brand on the left, the caller's links, then who is signed in.
#[component]
pub fn Navbar(#[props(into)] brand: String, children: Element) -> Element {
    let session = use_session();
    let email = session.read().as_ref().map(|s| s.email.clone());

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
            if let Some(email) = email {
                span { class: "navbar-user", "{email}" }
            }
        }
    }
}
