//! Building blocks shared by the screens.

mod add_book_form;
pub use add_book_form::AddBookForm;

mod book_card;
pub use book_card::{BookCard, BookCover};

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FormField, Input};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod navbar;
pub use navbar::Navbar;
