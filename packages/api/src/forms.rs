//! # Form payloads and client-side validation
//!
//! Each form on the front end has a raw, string-typed `*Form` struct bound to
//! its inputs. `validate` checks it in the order the user sees the messages
//! and produces the request payload the service expects. Rules are checked
//! before any request is sent; the service still has the final say.
//!
//! | Form | Payload | Endpoint |
//! |------|---------|----------|
//! | [`LoginRequest::new`] | [`LoginRequest`] | `POST /api/users/login` |
//! | [`SignupForm`] | [`SignupRequest`] | `POST /api/users/signup` |
//! | [`ProfileForm`] | [`ProfileUpdate`] | `PUT /profile` |
//! | [`BookForm`] | [`catalog::NewBook`] | `POST /api/books` |

use std::sync::LazyLock;

use catalog::{NewBook, Role, Session};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A form that cannot be submitted. `Display` is the message shown inline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Username and email are required")]
    MissingIdentity,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Title, author and genre are required")]
    MissingBookDetails,
    #[error("Available copies cannot be negative")]
    NegativeCopies,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Whatever the login endpoint returns on success. Every field is optional:
/// some deployments answer with a bare string, some with a token and role.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, alias = "accessToken", alias = "jwt")]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "userId")]
    pub id: Option<i64>,
}

impl LoginResponse {
    /// Lenient decode: non-JSON or non-object bodies mean "no extra info".
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn into_session(self, email: &str) -> Session {
        Session {
            email: email.to_string(),
            role: Role::resolve(self.role.as_deref(), email),
            token: self.token.filter(|t| !t.is_empty()),
            user_id: self.id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Profile editor state. A blank password means "keep the current one".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingIdentity);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(ProfileUpdate {
            username: username.to_string(),
            email: email.to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        })
    }
}

/// Librarian "Add New Book" form.
#[derive(Clone, Debug, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// `YYYY-MM-DD` from a date input, or empty.
    pub published_date: String,
    pub description: String,
    pub image_url: String,
    pub pdf_url: String,
    /// Raw number input; anything unparseable counts as 0.
    pub available: String,
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            published_date: String::new(),
            description: String::new(),
            image_url: String::new(),
            pdf_url: String::new(),
            available: "1".to_string(),
        }
    }
}

impl BookForm {
    pub fn validate(&self) -> Result<NewBook, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        let genre = self.genre.trim();
        if title.is_empty() || author.is_empty() || genre.is_empty() {
            return Err(ValidationError::MissingBookDetails);
        }
        let available = self.available.trim().parse::<i32>().unwrap_or(0);
        if available < 0 {
            return Err(ValidationError::NegativeCopies);
        }
        let description = self.description.trim();
        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_date: NaiveDate::parse_from_str(self.published_date.trim(), "%Y-%m-%d").ok(),
            description: (!description.is_empty()).then(|| description.to_string()),
            image_url: self.image_url.trim().to_string(),
            pdf_url: self.pdf_url.trim().to_string(),
            available,
        })
    }
}
