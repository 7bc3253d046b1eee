//! Landing page.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

const FEATURES: [(&str, &str); 4] = [
    ("Vast Collection", "Thousands of books across genres"),
    ("24/7 Access", "Access your books anytime, anywhere"),
    ("Track Your Loans", "See what you've borrowed at a glance"),
    ("Personal Profile", "Keep your account details up to date"),
];

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let dashboard = session.read().as_ref().map(|s| {
        if s.is_librarian() {
            Route::Librarian {}
        } else {
            Route::MemberDashboard {}
        }
    });
    let mut selected = use_signal(|| 0usize);

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Librix Nexus" }
            div {
                class: "navbar-links",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Signup {}, "Browse" }
            }
        }

        section {
            class: "hero",
            h1 { "Your library, one click away" }
            p { "Borrow, read and keep track of books from anywhere." }
            div {
                class: "hero-actions",
                if let Some(route) = dashboard {
                    Link { class: "btn btn-primary", to: route, "Go to dashboard" }
                } else {
                    Link { class: "btn btn-primary", to: Route::Login {}, "Log in" }
                    Link { class: "btn btn-secondary", to: Route::Signup {}, "Sign up" }
                }
            }
        }

        section {
            class: "features",
            for (i, (title, description)) in FEATURES.iter().enumerate() {
                button {
                    key: "{title}",
                    r#type: "button",
                    class: if selected() == i { "feature-card selected" } else { "feature-card" },
                    onclick: move |_| selected.set(i),
                    h3 { "{title}" }
                    p { "{description}" }
                }
            }
        }
    }
}
