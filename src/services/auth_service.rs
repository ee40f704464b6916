//! Demo login for Career Buddy.
//!
//! There is exactly one account. Only the SHA-256 digest of its password is
//! kept; a login attempt hashes the supplied password and compares digests.
//! The signed-in profile is mirrored into a [`SessionStore`] so a reload keeps
//! the user signed in.

use ring::digest;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::clock::{Clock, SystemClock};
use crate::storage::SessionStore;
use crate::types::auth::UserProfile;
use crate::types::errors::AuthError;

pub const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD_SHA256: &str = "1bc95450995e62e94321f3dbbcaffa29e4ae668f136b28e4685dcaf6def9901b";
const DEMO_DISPLAY_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@careerbuddy.app";

/// Store key holding the signed-in profile.
pub const USER_STORAGE_KEY: &str = "careerbuddy_user";

/// Trait defining login operations.
pub trait AuthServiceTrait {
    fn login(&mut self, username: &str, password: &str) -> Result<UserProfile, AuthError>;
    fn logout(&mut self);
    fn restore(&mut self) -> Option<UserProfile>;
    fn is_authenticated(&self) -> bool;
    fn current_user(&self) -> Option<&UserProfile>;
}

pub struct AuthService {
    store: Box<dyn SessionStore>,
    clock: Box<dyn Clock>,
    user: Option<UserProfile>,
}

impl AuthService {
    pub fn new<S: SessionStore + 'static>(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock<S, C>(store: S, clock: C) -> Self
    where
        S: SessionStore + 'static,
        C: Clock + 'static,
    {
        Self {
            store: Box::new(store),
            clock: Box::new(clock),
            user: None,
        }
    }

    /// Hashes a wiped-on-drop copy of `password`; the caller's buffer is left alone.
    fn password_matches(password: &str) -> bool {
        let buf = Zeroizing::new(password.as_bytes().to_vec());
        let actual = digest::digest(&digest::SHA256, &buf);
        hex_encode(actual.as_ref()) == DEMO_PASSWORD_SHA256
    }

    fn persist(&self, user: &UserProfile) -> Result<(), AuthError> {
        let json = serde_json::to_string(user)
            .map_err(|e| AuthError::SerializationError(e.to_string()))?;
        if let Err(e) = self.store.set(USER_STORAGE_KEY, &json) {
            warn!(error = %e, "failed to persist signed-in user");
        }
        Ok(())
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&mut self, username: &str, password: &str) -> Result<UserProfile, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        if !username.eq_ignore_ascii_case(DEMO_USERNAME) || !Self::password_matches(password) {
            warn!(username = %username, "rejected login");
            return Err(AuthError::InvalidCredentials);
        }

        let user = UserProfile {
            username: DEMO_USERNAME.to_string(),
            display_name: DEMO_DISPLAY_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            signed_in_at: self.clock.now_millis(),
        };
        self.persist(&user)?;
        info!(username = %user.username, "signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.store.remove(USER_STORAGE_KEY) {
            warn!(error = %e, "failed to remove signed-in user");
        }
    }

    /// Restores a previously signed-in user from the store. Unreadable data signs out.
    fn restore(&mut self) -> Option<UserProfile> {
        self.user = match self.store.get(USER_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<UserProfile>(&raw).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read signed-in user");
                None
            }
        };
        self.user.clone()
    }

    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
