//! This crate contains all shared UI for the library front end: the context
//! provider, hooks over the `catalog` state types, and the components the
//! screens are assembled from. Routing lives in the `web` crate.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod context;
pub use context::{
    end_session, make_session_store, start_session, use_api, use_config, use_session,
    LibraryProvider,
};

mod collection;
pub use collection::{use_books, use_borrow, use_collection, FALLBACK_USER_ID};

mod export;
pub use export::download_csv;

mod list;
pub use list::{use_list_controls, ListControls, ListSummary, ListToolbar, Pagination};

mod notifications;
pub use notifications::{use_notifier, NotificationStack, Notifier};

mod timer;
pub use timer::{sleep_ms, today};
