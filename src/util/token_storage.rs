//! Session-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store mirrors its token here on every login/logout, the HTTP wrapper
//! reads it before each request, and bootstrap reads it once at startup.
//! `BrowserStorage` writes to `localStorage` ("remember me") or
//! `sessionStorage`; `MemoryStorage` backs tests and server rendering.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod tests;

use std::sync::Mutex;

/// Which browser storage area holds the token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    /// `localStorage`: survives browser restarts.
    #[default]
    Local,
    /// `sessionStorage`: dropped when the tab closes.
    Session,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredToken {
    pub token: String,
    pub persistence: Persistence,
}

/// Persistent home of the session token. At most one token exists at a time.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<StoredToken>;

    /// Replace any stored token. The other storage area is cleared.
    fn save(&self, token: &str, persistence: Persistence);

    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.load().map(|stored| stored.token)
    }
}

/// `web-sys` backed storage keyed by the configured token key.
///
/// Without the `hydrate` feature every operation is a no-op and `load`
/// returns `None`.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn area(persistence: Persistence) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match persistence {
            Persistence::Local => window.local_storage().ok().flatten(),
            Persistence::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<StoredToken> {
        #[cfg(feature = "hydrate")]
        {
            [Persistence::Local, Persistence::Session].into_iter().find_map(|persistence| {
                let raw = Self::area(persistence)?.get_item(&self.key).ok().flatten()?;
                (!raw.is_empty()).then_some(StoredToken { token: raw, persistence })
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str, persistence: Persistence) {
        #[cfg(feature = "hydrate")]
        {
            self.clear();
            if let Some(storage) = Self::area(persistence) {
                if storage.set_item(&self.key, token).is_err() {
                    leptos::logging::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, persistence);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            for persistence in [Persistence::Local, Persistence::Session] {
                if let Some(storage) = Self::area(persistence) {
                    if storage.remove_item(&self.key).is_err() {
                        leptos::logging::warn!("failed to clear session token from {persistence:?} storage");
                    }
                }
            }
        }
    }
}

/// Process-local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<StoredToken>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str, persistence: Persistence) -> Self {
        Self {
            slot: Mutex::new(Some(StoredToken { token: token.to_owned(), persistence })),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<StoredToken> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str, persistence: Persistence) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(StoredToken { token: token.to_owned(), persistence });
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
