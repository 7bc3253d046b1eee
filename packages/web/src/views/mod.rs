mod home;
pub use home::Home;

mod login;
pub use login::{Login, Logout};

mod signup;
pub use signup::Signup;

mod layout;
pub use layout::{LibrarianLayout, MemberLayout};

mod member_dashboard;
pub use member_dashboard::MemberDashboard;

mod book_list;
pub use book_list::Catalog;

mod my_books;
pub use my_books::MyBooks;

mod profile;
pub use profile::Profile;

mod librarian;
pub use librarian::Librarian;

mod manage_books;
pub use manage_books::ManageBooks;

mod users;
pub use users::Users;

mod borrows;
pub use borrows::Borrows;

mod reports;
pub use reports::Reports;

use dioxus::prelude::*;

/// Spinner shown while a collection is still loading.
#[component]
fn Loading(#[props(into)] label: String) -> Element {
    rsx! {
        div {
            class: "loading-container",
            aria_live: "polite",
            div { class: "loading-spinner", aria_hidden: "true" }
            p { "{label}" }
        }
    }
}
