//! Default configuration values

/// Default EBS server URL
pub fn default_api_url() -> String {
    "https://slay-the-relics.baalorlord.tv".to_string()
}

/// Environment variable overriding the API URL
pub const ENV_API_URL: &str = "STR_EBS_API_URL";

/// Environment variable overriding the OAuth token
pub const ENV_TOKEN: &str = "STR_EBS_TOKEN";

/// Environment variable overriding the user id
pub const ENV_USER: &str = "STR_EBS_USER";
