//! Client-side state for the library front end: domain models, the shared
//! list pipeline, and the small stores the UI keeps between requests.

pub mod collection;
pub mod config;
pub mod debounce;
pub mod models;
pub mod notify;
pub mod query;
pub mod report;
pub mod session;

pub use collection::{Collection, Keyed};
pub use config::LibraryConfig;
pub use debounce::{Debounced, Ticket};
pub use models::{
    Book, BookSort, BorrowRecord, NewBook, NewBorrow, Profile, User, UserSort, PLACEHOLDER_COVER,
};
pub use notify::{Notification, NotificationKind, Notifications};
pub use query::{ListState, ListView, Listable, PageWindow, SortDirection, SortKey};
pub use session::{MemorySessionStore, Role, Session, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::LocalSessionStore;
