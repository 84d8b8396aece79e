//! Client-side persisted key/value storage holding the access token.
//!
//! The landing page only ever reads from the store; the token is written
//! by whatever performed the login.

pub mod errors;
pub mod file_store;

use std::collections::HashMap;

pub use errors::CredentialError;
pub use file_store::FileCredentialStore;

/// Key under which the bearer token is stored.
pub const ACCESS_TOKEN_KEY: &str = "access_Token";

/// Synchronous key/value lookup.
pub trait CredentialStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
}

impl CredentialStore for HashMap<String, String> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read the bearer token from the store.
pub fn access_token(store: &dyn CredentialStore) -> Option<String> {
    store.get_item(ACCESS_TOKEN_KEY)
}
