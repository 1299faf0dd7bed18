//! Credential storage for the EBS

use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth token sent as the bearer credential
    #[serde(default)]
    pub oauth_token: String,

    /// Broadcaster user id sent in the `User-ID` header
    #[serde(default)]
    pub user: String,
}

impl AuthConfig {
    /// Check whether requests can be authenticated
    ///
    /// # Returns
    ///
    /// `true` if both the token and the user id are set, `false` otherwise
    #[must_use]
    pub fn are_credentials_valid(&self) -> bool {
        !self.oauth_token.trim().is_empty() && !self.user.trim().is_empty()
    }

    /// Token with everything but the last four characters hidden
    #[must_use]
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.oauth_token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// Clear authentication data
    pub fn clear(&mut self) {
        self.oauth_token.clear();
        self.user.clear();
    }
}
