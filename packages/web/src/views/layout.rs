use dioxus::prelude::*;
use ui::components::Navbar;

use crate::Route;

#[component]
pub fn MemberLayout() -> Element {
    rsx! {
        Navbar {
            brand: "Library",
            Link { to: Route::MemberDashboard {}, active_class: "active", "Home" }
            Link { to: Route::Catalog {}, active_class: "active", "Browse Books" }
            Link { to: Route::MyBooks {}, active_class: "active", "My Books" }
            Link { to: Route::Profile {}, active_class: "active", "Profile" }
            Link { to: Route::Logout {}, "Logout" }
        }
        main {
            class: "main-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn LibrarianLayout() -> Element {
    rsx! {
        Navbar {
            brand: "📖 Library System",
            Link { to: Route::Librarian {}, active_class: "active", "Dashboard" }
            Link { to: Route::Reports {}, active_class: "active", "Reports" }
            Link { to: Route::ManageBooks {}, active_class: "active", "Manage Books" }
            Link { to: Route::Users {}, active_class: "active", "Users" }
            Link { to: Route::Borrows {}, active_class: "active", "Borrow Records" }
            Link { to: Route::Logout {}, "Logout" }
        }
        main {
            class: "main-content",
            Outlet::<Route> {}
        }
    }
}
