/// Login result
use serde::{Deserialize, Serialize};

/// What the auth endpoint returned for a successful login.
///
/// The auth host's body shape is not fixed, so every field is optional.
/// The token is handed to the caller and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, alias = "accessToken")]
    pub access_token: Option<String>,
}
