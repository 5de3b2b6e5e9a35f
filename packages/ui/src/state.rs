//! App-state context and hooks for the UI.
//!
//! [`AppStateProvider`] owns the single `Signal<AppState>`, restores the
//! session from storage on mount and writes it back whenever it changes. It
//! also builds the API clients from the [`AppConfig`] and shares them as
//! context; the private client is a memo keyed on the session token, so a
//! login or logout yields a new client carrying the new bearer token.

use api::{ApiClient, CancellationToken};
use dioxus::prelude::*;
use store::{load_session, save_session, Action, AppConfig, AppState, LoadingScope};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn session_storage() -> store::LocalStorage {
    store::LocalStorage::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn session_storage() -> store::MemoryStorage {
    store::MemoryStorage::new()
}

/// Client for the login and sign-up endpoints.
#[derive(Clone, PartialEq)]
struct PublicClient(ApiClient);

/// Get the shared app state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Client for authenticated endpoints, rebuilt when the session token changes.
pub fn use_api_client() -> Memo<ApiClient> {
    use_context::<Memo<ApiClient>>()
}

pub fn use_public_client() -> ApiClient {
    use_context::<PublicClient>().0
}

/// A `dispatch` callback for the `api::actions` functions.
pub fn dispatcher(mut state: Signal<AppState>) -> impl FnMut(Action) + Copy {
    move |action| state.write().dispatch(action)
}

/// Cancellation token tied to the calling component.
///
/// On unmount the token is cancelled and the given loading scope is reset,
/// so a view that disappears mid-request leaves no spinner behind.
pub fn use_cancel_token(scope: LoadingScope) -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    let mut state = use_app_state();

    use_drop({
        let token = token.clone();
        move || {
            token.cancel();
            if let Ok(mut state) = state.try_write() {
                state.dispatch(Action::ResetLoading(scope));
            }
        }
    });

    token
}

/// Provider component for the app state and API clients.
/// Wrap the router with this component.
#[component]
pub fn AppStateProvider(config: AppConfig, children: Element) -> Element {
    let clients = use_hook({
        let config = config.clone();
        move || {
            let public = ApiClient::public(&config).map(PublicClient);
            let private = ApiClient::private(&config, None);
            match (public, private) {
                (Ok(public), Ok(private)) => Some((public, private)),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::error!("Cannot build API client: {}", e);
                    None
                }
            }
        }
    });

    match clients {
        Some((public, private)) => rsx! {
            StateScope { config, public, private, {children} }
        },
        None => {
            let base_url = config.api.base_url;
            rsx! {
                div {
                    class: "config-error",
                    h2 { "Configuration error" }
                    p { "The API base URL \"{base_url}\" is not valid." }
                }
            }
        }
    }
}

#[component]
fn StateScope(
    config: AppConfig,
    public: PublicClient,
    private: ApiClient,
    children: Element,
) -> Element {
    let storage = use_hook(session_storage);

    let state = use_context_provider({
        let storage = storage.clone();
        move || Signal::new(AppState::with_session(load_session(&storage)))
    });
    use_context_provider(|| config);
    use_context_provider(|| public);

    let session = use_memo(move || state.read().session.clone());
    let client = use_memo(move || private.with_token(session.read().token()));
    use_context_provider(|| client);

    // Persist the session on every change
    use_effect(move || {
        let session = session.read();
        if let Err(e) = save_session(&storage, &session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
    });

    rsx! {
        {children}
    }
}
