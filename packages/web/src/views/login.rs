//! Login page and the logout route that lands on it.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormField, Input};
use ui::{end_session, start_session, use_api, use_session};

use crate::Route;

const LOGIN_FAILED: &str = "Login failed: Invalid email or password";

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let request = match LoginRequest::new(&email(), &password()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api.login(&request).await {
                Ok(response) => {
                    let signed_in = response.into_session(&request.email);
                    let destination = if signed_in.is_librarian() {
                        Route::Librarian {}
                    } else {
                        Route::MemberDashboard {}
                    };
                    start_session(session, &api, signed_in);
                    nav.push(destination);
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    loading.set(false);
                    let message = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| LOGIN_FAILED.to_string());
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Sign in to your library account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "error-message", role: "alert", "{err}" }
                }

                FormField {
                    label: "Email",
                    id: "login-email",
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                FormField {
                    label: "Password",
                    id: "login-password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Log in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}

/// Forget the session, then show the login form.
#[component]
pub fn Logout() -> Element {
    let api = use_api();
    let session = use_session();
    use_effect(move || end_session(session, &api));

    rsx! {
        Login {}
    }
}
