//! # Domain models for the library backend
//!
//! These types mirror the JSON the library REST service sends and accepts.
//! Field names are camelCase on the wire (`imageUrl`, `borrowDate`, ...).
//! Every optional or server-owned field is `#[serde(default)]` so a sparse
//! payload still decodes; the client never owns the authoritative copy.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Book`] | `GET /api/books` |
//! | [`NewBook`] | `POST /api/books` |
//! | [`User`] | `GET /api/users` |
//! | [`BorrowRecord`] | `GET /api/borrows` |
//! | [`NewBorrow`] | `POST /api/borrows` |
//! | [`Profile`] | `GET /profile` |
//!
//! The [`Listable`] and [`Keyed`] impls at the bottom plug books and users
//! into the list pipeline and the collection cache.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::query::{compare_text, Listable, SortKey};

/// Cover shown when a book has no image or the image fails to load.
pub const PLACEHOLDER_COVER: &str = "/placeholder-book.jpg";

/// A book as returned by `GET /api/books`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    /// Copies on the shelf. Older backends call this `quantity`.
    #[serde(default, alias = "quantity")]
    pub available: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Set by the client after a successful borrow.
    #[serde(default)]
    pub is_borrowed: bool,
}

impl Book {
    pub fn cover_url(&self) -> &str {
        non_blank(self.image_url.as_deref()).unwrap_or(PLACEHOLDER_COVER)
    }

    pub fn pdf_href(&self) -> &str {
        non_blank(self.pdf_url.as_deref()).unwrap_or("#")
    }

    /// Genre for grouping and display, `None` when missing or blank.
    pub fn genre_name(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }
}

/// Payload for `POST /api/books`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub pdf_url: String,
    pub available: i32,
}

/// A registered account as listed by `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref())
            .or_else(|| non_blank(self.email.as_deref()))
            .unwrap_or("Unknown")
    }

    pub fn role_label(&self) -> &str {
        non_blank(self.role.as_deref()).unwrap_or("Member")
    }

    /// Email for table cells, `-` when the service sent none.
    pub fn email_label(&self) -> &str {
        non_blank(self.email.as_deref()).unwrap_or("-")
    }
}

/// Borrower summary embedded in a borrow record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Option<i64>,
    #[serde(default, alias = "username")]
    pub name: Option<String>,
}

/// Book summary embedded in a borrow record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookRef {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// A loan as returned by `GET /api/borrows`.
///
/// The backend either embeds `user`/`book` objects or sends flat
/// `userId`/`bookId` fields; both shapes decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub book_id: Option<i64>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub book: Option<BookRef>,
    #[serde(default, with = "lenient_date")]
    pub borrow_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub return_date: Option<NaiveDate>,
}

impl BorrowRecord {
    pub fn borrower_id(&self) -> Option<i64> {
        self.user_id
            .or_else(|| self.user.as_ref().and_then(|u| u.id))
    }

    pub fn borrowed_book_id(&self) -> Option<i64> {
        self.book_id
            .or_else(|| self.book.as_ref().and_then(|b| b.id))
    }

    pub fn borrower_name(&self) -> String {
        match (&self.user, self.borrower_id()) {
            (Some(UserRef { name: Some(name), .. }), _) => name.clone(),
            (_, Some(id)) => format!("User #{id}"),
            _ => "Unknown".to_string(),
        }
    }

    pub fn book_title(&self) -> String {
        match (&self.book, self.borrowed_book_id()) {
            (Some(BookRef { title: Some(title), .. }), _) => title.clone(),
            (_, Some(id)) => format!("Book #{id}"),
            _ => "Unknown".to_string(),
        }
    }

    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

/// Payload for `POST /api/borrows`. `returnDate` is always sent, as `null`
/// for a fresh loan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBorrow {
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl NewBorrow {
    pub fn new(user_id: i64, book_id: i64, borrow_date: NaiveDate) -> Self {
        Self {
            user_id,
            book_id,
            borrow_date,
            return_date: None,
        }
    }
}

/// The signed-in account as returned by `GET /profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, alias = "name")]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts `"2024-03-01"`, `"2024-03-01T10:00:00"` or `null`. Anything
/// unparseable decodes as `None` rather than failing the whole list.
mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.and_then(|s| {
            let day = s.split('T').next().unwrap_or_default();
            NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
        }))
    }
}

// List pipeline integration

/// Sort keys offered on book screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookSort {
    #[default]
    Title,
    Author,
    Genre,
}

impl SortKey for BookSort {
    const ALL: &'static [Self] = &[BookSort::Title, BookSort::Author, BookSort::Genre];

    fn as_str(self) -> &'static str {
        match self {
            BookSort::Title => "title",
            BookSort::Author => "author",
            BookSort::Genre => "genre",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BookSort::Title => "Sort by Title",
            BookSort::Author => "Sort by Author",
            BookSort::Genre => "Sort by Genre",
        }
    }
}

impl Listable for Book {
    type Sort = BookSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn compare_by(&self, other: &Self, key: BookSort) -> Ordering {
        match key {
            BookSort::Title => compare_text(&self.title, &other.title),
            BookSort::Author => compare_text(&self.author, &other.author),
            BookSort::Genre => compare_text(
                self.genre.as_deref().unwrap_or_default(),
                other.genre.as_deref().unwrap_or_default(),
            ),
        }
    }
}

impl Keyed for Book {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Sort keys offered on the user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSort {
    Id,
    #[default]
    Name,
    Email,
}

impl SortKey for UserSort {
    const ALL: &'static [Self] = &[UserSort::Id, UserSort::Name, UserSort::Email];

    fn as_str(self) -> &'static str {
        match self {
            UserSort::Id => "id",
            UserSort::Name => "name",
            UserSort::Email => "email",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UserSort::Id => "Sort by ID",
            UserSort::Name => "Sort by Name",
            UserSort::Email => "Sort by Email",
        }
    }
}

impl Listable for User {
    type Sort = UserSort;

    fn search_fields(&self) -> Vec<&str> {
        self.name
            .as_deref()
            .into_iter()
            .chain(self.email.as_deref())
            .collect()
    }

    fn compare_by(&self, other: &Self, key: UserSort) -> Ordering {
        match key {
            UserSort::Id => self.id.cmp(&other.id),
            UserSort::Name => compare_text(
                self.name.as_deref().unwrap_or_default(),
                other.name.as_deref().unwrap_or_default(),
            ),
            UserSort::Email => compare_text(
                self.email.as_deref().unwrap_or_default(),
                other.email.as_deref().unwrap_or_default(),
            ),
        }
    }
}

impl Keyed for User {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Records from older backends may lack an id; those share the `None` key.
impl Keyed for BorrowRecord {
    type Key = Option<i64>;

    fn key(&self) -> Option<i64> {
        self.id
    }
}
