//! Authentication against the login host.

use crate::error::{Result, ServerClientError};
use crate::http::{Body, HttpApi};
use crate::types::LoginRequest;
use songbook_core::Session;
use tracing::{debug, info, warn};

/// Authentication client.
pub struct AuthClient<'a> {
    http: &'a HttpApi,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a HttpApi) -> Self {
        Self { http }
    }

    /// `POST /auth/login` with a JSON body.
    ///
    /// Any non-success status surfaces as `ServerError`; the caller decides
    /// that this means bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        debug!(username = %username, "Attempting login");

        let body = Body::json(&LoginRequest { username, password })?;
        match self.http.post::<Session>("/auth/login", body, None).await {
            Ok(session) => {
                info!(username = %username, "Login successful");
                Ok(session)
            }
            Err(ServerClientError::ServerError { status, message }) => {
                warn!(status, error = %message, "Login failed: invalid credentials");
                Err(ServerClientError::ServerError { status, message })
            }
            Err(e) => Err(e),
        }
    }
}
