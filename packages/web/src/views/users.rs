//! User administration: search, sort, page, view and delete.

use catalog::{User, UserSort};
use dioxus::prelude::*;
use ui::components::ConfirmDialog;
use ui::{
    use_api, use_collection, use_list_controls, use_notifier, ListSummary, ListToolbar,
    Pagination,
};

use super::Loading;

#[component]
pub fn Users() -> Element {
    let api = use_api();
    let notifier = use_notifier();
    let mut users = use_collection("users", |api| async move { api.list_users().await });
    let controls = use_list_controls::<UserSort>();
    let mut confirm = use_signal(|| Option::<User>::None);

    let delete_user = move |user: User| {
        let api = api.clone();
        spawn(async move {
            users.write().begin_action(user.id);
            match api.delete_user(user.id).await {
                Ok(()) => {
                    users.write().remove(user.id);
                    confirm.set(None);
                    notifier.success("User deleted successfully!");
                }
                Err(e) => {
                    tracing::error!("failed to delete user {}: {e}", user.id);
                    notifier.error("Failed to delete user. Please try again.");
                }
            }
            users.write().end_action(user.id);
        });
    };

    let collection = users.read();
    let view = controls.state.read().apply(collection.items());
    let rows: Vec<(User, bool)> = view
        .rows
        .iter()
        .map(|user| ((*user).clone(), collection.is_pending(user.id)))
        .collect();
    let (matched, window) = (view.matched, view.window);
    let loading = collection.is_loading();
    let error = collection.error().map(str::to_string);
    let deleting = confirm()
        .map(|u| collection.is_pending(u.id))
        .unwrap_or(false);
    drop(collection);

    rsx! {
        div {
            class: "content-container",
            h2 { class: "page-title", "User Management" }

            ListToolbar { controls, placeholder: "Search by name or email..." }

            if let Some(err) = error {
                div { class: "error-message", role: "alert", "{err}" }
            }

            if loading {
                Loading { label: "Loading users..." }
            } else if rows.is_empty() {
                div { class: "no-results", "No users found." }
            } else {
                ListSummary { window, matched, noun: "users" }
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (user, pending) in rows {
                            tr {
                                key: "{user.id}",
                                td { "{user.id}" }
                                td { "{user.display_name()}" }
                                td { "{user.email_label()}" }
                                td { "{user.role_label()}" }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| {
                                                notifier.info(format!("Viewing user: {}", user.display_name()));
                                            }
                                        },
                                        "View"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        r#type: "button",
                                        disabled: pending,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| confirm.set(Some(user.clone()))
                                        },
                                        if pending { "Deleting..." } else { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { window, on_page: move |page| controls.go_to(page) }
            }
        }

        if let Some(user) = confirm() {
            ConfirmDialog {
                title: "Confirm Deletion",
                message: format!(
                    "Are you sure you want to delete user {}? This action cannot be undone.",
                    user.display_name()
                ),
                busy: deleting,
                on_confirm: move |_| delete_user(user.clone()),
                on_cancel: move |_| confirm.set(None),
            }
        }
    }
}
