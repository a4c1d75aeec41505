use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The logged-in user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// A user plus their bearer token. Lives only in memory; never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// In-memory authentication state, injected explicitly wherever a token
/// is needed. There is no global — dropping the context logs the user out.
///
/// Every remote operation asks for `bearer_token()` first, so
/// unauthenticated access fails with `Unauthorized` before any network I/O.
#[derive(Debug, Default)]
pub struct AuthContext {
    session: Option<Session>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Store a user/token pair. Replaces any existing session.
    pub fn login(&mut self, user: User, token: impl Into<String>) {
        self.session = Some(Session::new(user, token));
    }

    /// Discard the session. Idempotent.
    pub fn logout(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The bearer token for API requests, or `Unauthorized` when logged out.
    pub fn bearer_token(&self) -> Result<&str, CoreError> {
        self.session
            .as_ref()
            .map(Session::token)
            .ok_or(CoreError::Unauthorized)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
