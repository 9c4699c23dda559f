//! Login page.

use songbook_core::{Credentials, Route, Session, SongbookApi, SongbookError};
use tracing::{debug, info};

const LOGIN_FAILED: &str = "Login failed";

/// Login form state.
#[derive(Debug, Default)]
pub struct LoginPage {
    pub credentials: Credentials,
    error: Option<String>,
    loading: bool,
    session: Option<Session>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Session returned by the last successful login
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Submit the form. Returns where to navigate on success.
    pub async fn submit<A>(&mut self, api: &A) -> Option<Route>
    where
        A: SongbookApi + ?Sized,
    {
        self.error = None;

        if let Err(e) = self.credentials.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.loading = true;
        debug!(username = %self.credentials.username, "Submitting login");
        let result = api.login(&self.credentials).await;
        self.loading = false;

        match result {
            Ok(session) => {
                info!(username = %self.credentials.username, "Logged in");
                self.session = Some(session);
                Some(Route::Playlists)
            }
            Err(SongbookError::InvalidCredentials) => {
                self.error = Some(SongbookError::InvalidCredentials.to_string());
                None
            }
            Err(e) => {
                debug!(error = %e, "Login request failed");
                self.error = Some(LOGIN_FAILED.to_string());
                None
            }
        }
    }
}
