use api::ProfileForm;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormField, Input};
use ui::{use_api, use_notifier};

use super::Loading;

const UPDATED: &str = "Profile updated successfully";

#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let notifier = use_notifier();
    let mut form = use_signal(ProfileForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let loader_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match loader_api.get_profile().await {
                Ok(profile) => {
                    let mut current = form.write();
                    current.username = profile.username;
                    current.email = profile.email;
                }
                Err(e) => {
                    tracing::error!("failed to load profile: {e}");
                    error.set(Some(
                        "An error occurred while fetching user details.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            let update = match form.read().validate() {
                Ok(update) => update,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            saving.set(true);
            match api.update_profile(&update).await {
                Ok(()) => {
                    let mut current = form.write();
                    current.password.clear();
                    current.confirm_password.clear();
                    drop(current);
                    success.set(Some(UPDATED.to_string()));
                    notifier.success(UPDATED);
                }
                Err(e) => {
                    tracing::warn!("profile update failed: {e}");
                    let message = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Update failed".to_string());
                    error.set(Some(message));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! {
            Loading { label: "Loading profile..." }
        };
    }

    let current = form();

    rsx! {
        div {
            class: "content-container form-container",
            h2 { class: "page-title", "My Profile" }

            if let Some(err) = error() {
                div { class: "error-message", role: "alert", "{err}" }
            }
            if let Some(message) = success() {
                div { class: "success-message", "{message}" }
            }

            form {
                onsubmit: handle_save,
                FormField {
                    label: "Username",
                    id: "profile-username",
                    Input {
                        id: "profile-username",
                        value: current.username.clone(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                FormField {
                    label: "Email",
                    id: "profile-email",
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                FormField {
                    label: "New Password",
                    id: "profile-password",
                    Input {
                        id: "profile-password",
                        r#type: "password",
                        placeholder: "Leave blank to keep the current password",
                        value: current.password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                FormField {
                    label: "Confirm New Password",
                    id: "profile-confirm",
                    Input {
                        id: "profile-confirm",
                        r#type: "password",
                        value: current.confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Update Profile" }
                }
            }
        }
    }
}
