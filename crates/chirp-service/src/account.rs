use std::sync::Arc;

use chirp_db::AccountStore;
use chirp_types::api::Credentials;
use chirp_types::models::Account;
use tracing::{debug, info};

use crate::{
    AuthError, CredentialScheme, MIN_PASSWORD_LEN, Result, ValidationError, is_blank, text_len,
};

pub struct AccountService<S: AccountStore> {
    store: Arc<S>,
    scheme: CredentialScheme,
}

impl<S: AccountStore> AccountService<S> {
    pub fn new(store: Arc<S>, scheme: CredentialScheme) -> Self {
        Self { store, scheme }
    }

    /// Validates and persists a new account.
    ///
    /// Username uniqueness is enforced by the store on insert, so two
    /// concurrent registrations of the same name cannot both succeed; the
    /// loser gets `ServiceError::Conflict`.
    pub fn register(&self, candidate: Credentials) -> Result<Account> {
        let username = candidate.username.unwrap_or_default();
        if is_blank(&username) {
            return Err(ValidationError::BlankUsername.into());
        }

        let password = candidate.password.unwrap_or_default();
        if text_len(&password) < MIN_PASSWORD_LEN {
            return Err(ValidationError::ShortPassword.into());
        }

        let stored = self.scheme.protect(&password)?;
        let mut account = self.store.save_account(&username, &stored)?;
        if self.scheme != CredentialScheme::Plain {
            // Never echo a hash back to the client.
            account.password = password;
        }

        info!(account_id = account.id, "Registered account '{}'", account.username);
        Ok(account)
    }

    /// Returns the stored account when the username exists and the password verifies.
    pub fn login(&self, credentials: Credentials) -> Result<Account> {
        let username = credentials.username.unwrap_or_default();
        let mut account = self
            .store
            .find_account_by_username(&username)?
            .ok_or(AuthError::UnknownUsername)?;

        let password = credentials.password.unwrap_or_default();
        if !self.scheme.verify(&password, &account.password) {
            debug!("Rejected login for '{}'", username);
            return Err(AuthError::InvalidCredentials.into());
        }

        if self.scheme != CredentialScheme::Plain {
            account.password = password;
        }
        Ok(account)
    }
}
