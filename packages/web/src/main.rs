use catalog::LibraryConfig;
use dioxus::prelude::*;

use ui::{LibraryProvider, NotificationStack};
use views::{
    Borrows, Catalog, Home, Librarian, LibrarianLayout, Login, Logout, ManageBooks,
    MemberDashboard, MemberLayout, MyBooks, Profile, Reports, Signup, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/logout")]
    Logout {},
    #[route("/signup")]
    Signup {},

    #[layout(MemberLayout)]
        #[route("/user")]
        MemberDashboard {},
        #[route("/book_list")]
        Catalog {},
        #[route("/my_books")]
        MyBooks {},
        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[layout(LibrarianLayout)]
        #[route("/librarian")]
        Librarian {},
        #[route("/librarian/books")]
        ManageBooks {},
        #[route("/admin/users")]
        Users {},
        #[route("/admin/borrows")]
        Borrows {},
        #[route("/reports")]
        Reports {},
    #[end_layout]

    #[redirect("/manage_books", || Route::ManageBooks {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time configuration, see `libris.toml`.
const CONFIG_TOML: &str = include_str!("../libris.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| LibraryConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        LibraryProvider {
            config,
            NotificationStack {}
            Router::<Route> {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "page-centered",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}
