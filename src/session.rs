//! Client-side session store.
//!
//! The session (bearer token + user profile) lives in a context signal
//! provided at the app root and is mirrored into `localStorage` so it
//! survives reloads. No expiry check happens here; a stale token stays in
//! place until the backend rejects a request and the user logs out.

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

pub use crate::models::Session;

const STORAGE_KEY: &str = "walletfront.session";

/// Rehydrate the persisted session, if any. Called once at app start.
pub fn load() -> Option<Session> {
    LocalStorage::get(STORAGE_KEY).ok()
}

/// The session context signal. Must be called under the app root provider.
pub fn use_session() -> Signal<Option<Session>> {
    use_context()
}

/// Persist a freshly authenticated session and make protected routes
/// reachable.
pub fn set_session(mut signal: Signal<Option<Session>>, session: Session) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY, &session) {
        log::error!("failed to persist session: {e}");
    }
    signal.set(Some(session));
}

/// Drop the session from storage and context; protected routes redirect to
/// login from here on.
pub fn clear_session(mut signal: Signal<Option<Session>>) {
    LocalStorage::delete(STORAGE_KEY);
    signal.set(None);
}
