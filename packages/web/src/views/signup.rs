use api::SignupForm;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormField, Input};
use ui::{use_api, use_notifier};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let notifier = use_notifier();
    let nav = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let request = match form.read().validate() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api.signup(&request).await {
                Ok(()) => {
                    notifier.success("Account created. Please log in.");
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("signup failed: {e}");
                    loading.set(false);
                    let message = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Signup failed".to_string());
                    error.set(Some(message));
                }
            }
        });
    };

    let current = form();

    rsx! {
        div {
            class: "auth-container",
            h1 { "Create Account" }
            p { class: "auth-subtitle", "Join the library" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                if let Some(err) = error() {
                    div { class: "error-message", role: "alert", "{err}" }
                }

                FormField {
                    label: "Username",
                    id: "signup-username",
                    Input {
                        id: "signup-username",
                        value: current.username.clone(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                FormField {
                    label: "Email",
                    id: "signup-email",
                    Input {
                        id: "signup-email",
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                FormField {
                    label: "Password",
                    id: "signup-password",
                    Input {
                        id: "signup-password",
                        r#type: "password",
                        placeholder: "At least 8 characters",
                        value: current.password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                FormField {
                    label: "Confirm Password",
                    id: "signup-confirm",
                    Input {
                        id: "signup-confirm",
                        r#type: "password",
                        value: current.confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
