//! REST client for the library service.
//!
//! One [`ApiClient`] is created at startup and shared through context. Clones
//! share the bearer token, so signing in on one screen authenticates every
//! later request.

use std::sync::{Arc, RwLock};

use catalog::{Book, BorrowRecord, NewBook, NewBorrow, Profile, User};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::forms::{LoginRequest, LoginResponse, ProfileUpdate, SignupRequest};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: Arc::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach (or with `None`, stop attaching) a bearer token.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and return the body text of a 2xx response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }
        Ok(body)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<String, ApiError> {
        self.send(self.request(method, path).json(payload)).await
    }

    /// GET a collection. A JSON body that is not an array reads as empty.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let body = self.send(self.request(Method::GET, path)).await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if !value.is_array() {
            tracing::warn!("GET {path}: expected a JSON array, treating as empty");
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.fetch_list("/api/books").await
    }

    /// Returns the created book when the service echoes it back.
    pub async fn create_book(&self, book: &NewBook) -> Result<Option<Book>, ApiError> {
        let body = self.send_json(Method::POST, "/api/books", book).await?;
        tracing::info!("added book {:?}", book.title);
        Ok(serde_json::from_str(&body).ok())
    }

    pub async fn list_borrows(&self) -> Result<Vec<BorrowRecord>, ApiError> {
        self.fetch_list("/api/borrows").await
    }

    pub async fn create_borrow(&self, borrow: &NewBorrow) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/api/borrows", borrow).await?;
        tracing::info!("user {} borrowed book {}", borrow.user_id, borrow.book_id);
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_list("/api/users").await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/api/users/{id}")))
            .await?;
        tracing::info!("deleted user {id}");
        Ok(())
    }

    /// Any 2xx is a successful login; the body may or may not carry details.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = self
            .send_json(Method::POST, "/api/users/login", request)
            .await?;
        Ok(LoginResponse::from_body(&body))
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/api/users/signup", request)
            .await?;
        tracing::info!("registered {}", request.email);
        Ok(())
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let body = self.send(self.request(Method::GET, "/profile")).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "/profile", update).await?;
        tracing::info!("profile updated");
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn serve(app: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ApiClient::new(format!("http://{addr}/"))
    }

    #[tokio::test]
    async fn test_list_books_decodes_sparse_records() {
        let app = Router::new().route(
            "/api/books",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Dune", "author": "Herbert", "genre": "Sci-Fi", "isBorrowed": true},
                    {"id": 2, "title": "Emma", "author": "Austen"}
                ]))
            }),
        );
        let client = serve(app).await;

        let books = client.list_books().await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(books[0].is_borrowed);
        assert_eq!(books[1].genre, None);
        assert!(!books[1].is_borrowed);
    }

    #[tokio::test]
    async fn test_non_array_list_is_empty() {
        let app = Router::new().route(
            "/api/users",
            get(|| async { Json(json!({"content": []})) }),
        );
        let client = serve(app).await;
        assert!(client.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let app = Router::new().route("/api/borrows", get(|| async { "<html>oops</html>" }));
        let client = serve(app).await;
        let err = client.list_borrows().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let app = Router::new().route(
            "/api/users/signup",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"message": "Email already registered"})),
                )
            }),
        );
        let client = serve(app).await;
        let request = SignupRequest {
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: "hopper123".into(),
        };

        let err = client.signup(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_create_borrow_sends_expected_payload() {
        let received: Received = Arc::default();
        let app = Router::new()
            .route(
                "/api/borrows",
                post(
                    |State(received): State<Received>, Json(body): Json<Value>| async move {
                        received.lock().await.push(body);
                        StatusCode::CREATED
                    },
                ),
            )
            .with_state(received.clone());
        let client = serve(app).await;

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        client
            .create_borrow(&NewBorrow::new(3, 42, date))
            .await
            .unwrap();

        let bodies = received.lock().await;
        assert_eq!(
            bodies[0],
            json!({"userId": 3, "bookId": 42, "borrowDate": "2024-06-01", "returnDate": null})
        );
    }

    #[tokio::test]
    async fn test_delete_user_hits_id_path() {
        let received: Received = Arc::default();
        let app = Router::new()
            .route(
                "/api/users/{id}",
                delete(
                    |State(received): State<Received>, Path(id): Path<i64>| async move {
                        received.lock().await.push(json!(id));
                        StatusCode::NO_CONTENT
                    },
                ),
            )
            .with_state(received.clone());
        let client = serve(app).await;

        client.delete_user(5).await.unwrap();
        assert_eq!(*received.lock().await, vec![json!(5)]);
    }

    #[tokio::test]
    async fn test_login_accepts_plain_text_body() {
        let app = Router::new().route("/api/users/login", post(|| async { "Login successful" }));
        let client = serve(app).await;

        let request = LoginRequest::new("reader@example.com", "secret").unwrap();
        let response = client.login(&request).await.unwrap();
        assert_eq!(response, LoginResponse::default());
    }

    #[tokio::test]
    async fn test_login_rejection_is_unauthorized() {
        let app = Router::new().route(
            "/api/users/login",
            post(|| async { (StatusCode::UNAUTHORIZED, "Invalid credentials") }),
        );
        let client = serve(app).await;

        let request = LoginRequest::new("reader@example.com", "wrong").unwrap();
        let err = client.login(&request).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached_once_set() {
        let app = Router::new().route(
            "/profile",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                if auth == "Bearer t0k" {
                    Ok(Json(json!({"username": "grace", "email": "grace@example.com"})))
                } else {
                    Err(StatusCode::UNAUTHORIZED)
                }
            }),
        );
        let client = serve(app).await;

        assert!(client.get_profile().await.unwrap_err().is_unauthorized());

        client.clone().set_token(Some("t0k".into()));
        let profile = client.get_profile().await.unwrap();
        assert_eq!(profile.username, "grace");
    }

    #[tokio::test]
    async fn test_update_profile_omits_blank_password() {
        let received: Received = Arc::default();
        let app = Router::new()
            .route(
                "/profile",
                axum::routing::put(
                    |State(received): State<Received>, Json(body): Json<Value>| async move {
                        received.lock().await.push(body);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(received.clone());
        let client = serve(app).await;

        let update = ProfileUpdate {
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: None,
        };
        client.update_profile(&update).await.unwrap();
        assert_eq!(
            received.lock().await[0],
            json!({"username": "grace", "email": "grace@example.com"})
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(
            ApiClient::new("http://localhost:8080/").base_url(),
            "http://localhost:8080"
        );
    }
}
