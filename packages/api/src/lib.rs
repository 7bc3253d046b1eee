//! # API crate: client for the library REST service
//!
//! Every screen talks to the backend through this crate. It owns the HTTP
//! plumbing and the client-side rules a form must pass before anything is
//! sent.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per endpoint, bearer token shared across clones |
//! | [`error`] | [`ApiError`]: transport, non-2xx status (with the server's message) and decode failures |
//! | [`forms`] | Raw form state, validation, and the request payloads built from it |
//!
//! ## Endpoints
//!
//! - **Books**: `list_books`, `create_book`
//! - **Borrows**: `list_borrows`, `create_borrow`
//! - **Users**: `list_users`, `delete_user`
//! - **Accounts**: `login`, `signup`, `get_profile`, `update_profile`

pub mod client;
pub mod error;
pub mod forms;

pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{
    BookForm, LoginRequest, LoginResponse, ProfileForm, ProfileUpdate, SignupForm, SignupRequest,
    ValidationError,
};
