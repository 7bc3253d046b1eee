//! App-wide context: configuration, the API client and the signed-in session.

use api::ApiClient;
use catalog::{LibraryConfig, Notifications, Session, SessionStore};
use dioxus::prelude::*;

/// One slot for the whole process, shared by every handle.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
static MEMORY_SESSIONS: std::sync::LazyLock<catalog::MemorySessionStore> =
    std::sync::LazyLock::new(catalog::MemorySessionStore::new);

/// The session store for the current target. Every call returns a handle to
/// the same underlying storage.
pub fn make_session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        catalog::LocalSessionStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        MEMORY_SESSIONS.clone()
    }
}

/// Provides everything the screens pull from context. Wrap the router with it.
///
/// A session persisted by an earlier visit is restored before the first
/// render, and its token attached to the client.
#[component]
pub fn LibraryProvider(config: LibraryConfig, children: Element) -> Element {
    let api = use_hook(|| ApiClient::new(config.api.base_url.clone()));
    let session = use_signal(|| {
        let restored = make_session_store().load();
        if let Some(session) = &restored {
            tracing::debug!("restored session for {}", session.email);
            api.set_token(session.token.clone());
        }
        restored
    });
    let notifications = use_signal(Notifications::new);

    use_context_provider(|| config.clone());
    use_context_provider(|| api.clone());
    use_context_provider(|| session);
    use_context_provider(|| notifications);

    rsx! {
        {children}
    }
}

pub fn use_config() -> LibraryConfig {
    use_context::<LibraryConfig>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The current session, `None` when signed out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Remember `session`, authenticate later requests with its token, and
/// publish it to every screen.
pub fn start_session(mut state: Signal<Option<Session>>, api: &ApiClient, session: Session) {
    make_session_store().save(&session);
    api.set_token(session.token.clone());
    tracing::info!("signed in as {}", session.email);
    state.set(Some(session));
}

pub fn end_session(mut state: Signal<Option<Session>>, api: &ApiClient) {
    make_session_store().clear();
    api.set_token(None);
    if state.peek().is_some() {
        tracing::info!("signed out");
        state.set(None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use catalog::Role;

    #[test]
    fn test_session_outlives_the_store_handle() {
        let session = Session {
            email: "grace@example.com".into(),
            role: Role::Member,
            token: Some("t0k".into()),
            user_id: Some(3),
        };
        make_session_store().save(&session);
        assert_eq!(make_session_store().load(), Some(session));

        make_session_store().clear();
        assert_eq!(make_session_store().load(), None);
    }
}
