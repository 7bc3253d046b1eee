use dioxus::prelude::*;
use ui::components::AddBookForm;

use crate::Route;

#[component]
pub fn Librarian() -> Element {
    rsx! {
        div {
            class: "dashboard",
            h2 { "📚 Librarian Dashboard" }
            p { "Manage books, users, and reports efficiently." }
            div {
                class: "dashboard-links",
                Link { class: "btn btn-secondary", to: Route::ManageBooks {}, "Manage Books" }
                Link { class: "btn btn-secondary", to: Route::Users {}, "Users" }
                Link { class: "btn btn-secondary", to: Route::Borrows {}, "Borrow Records" }
                Link { class: "btn btn-secondary", to: Route::Reports {}, "Reports" }
            }
        }
        AddBookForm {}
    }
}
