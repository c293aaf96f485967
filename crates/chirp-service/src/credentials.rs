use std::fmt;
use std::str::FromStr;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::warn;

use crate::{Result, ServiceError};

/// How passwords are stored and compared.
///
/// `Plain` keeps the password verbatim and compares by exact equality, which
/// is what existing clients observe (the account returned from register and
/// login echoes the password). `Argon2` stores an Argon2id PHC string instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialScheme {
    #[default]
    Plain,
    Argon2,
}

impl CredentialScheme {
    /// Produces the value to persist for `password`.
    pub fn protect(&self, password: &str) -> Result<String> {
        match self {
            Self::Plain => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| ServiceError::Credential(e.to_string()))
            }
        }
    }

    /// Checks a supplied password against a persisted value.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self {
            Self::Plain => password == stored,
            Self::Argon2 => {
                let parsed = match PasswordHash::new(stored) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        warn!("Stored password is not a PHC string: {}", e);
                        return false;
                    }
                };
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown password scheme '{0}' (expected 'plain' or 'argon2')")]
pub struct UnknownScheme(String);

impl FromStr for CredentialScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "argon2" => Ok(Self::Argon2),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Argon2 => f.write_str("argon2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_exact_match() {
        let stored = CredentialScheme::Plain.protect("pass1").unwrap();
        assert_eq!(stored, "pass1");
        assert!(CredentialScheme::Plain.verify("pass1", &stored));
        assert!(!CredentialScheme::Plain.verify("Pass1", &stored));
        assert!(!CredentialScheme::Plain.verify("pass1 ", &stored));
    }

    #[test]
    fn argon2_hashes_and_verifies() {
        let stored = CredentialScheme::Argon2.protect("pass1").unwrap();
        assert_ne!(stored, "pass1");
        assert!(stored.starts_with("$argon2"));
        assert!(CredentialScheme::Argon2.verify("pass1", &stored));
        assert!(!CredentialScheme::Argon2.verify("wrong", &stored));
    }

    #[test]
    fn argon2_rejects_non_phc_values() {
        assert!(!CredentialScheme::Argon2.verify("pass1", "pass1"));
    }

    #[test]
    fn parses_scheme_names() {
        assert_eq!("plain".parse::<CredentialScheme>().unwrap(), CredentialScheme::Plain);
        assert_eq!(" Argon2 ".parse::<CredentialScheme>().unwrap(), CredentialScheme::Argon2);
        assert!("bcrypt".parse::<CredentialScheme>().is_err());
    }
}
