use crate::auth::credentials::{Credentials, IniCredentialManager};
use crate::error::Error;
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api2.dynect.net";
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.cfg";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub credentials: Credentials,
}

impl Config {
    /// Reads credentials from `path` and the API endpoint settings from the
    /// environment.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let manager = IniCredentialManager::load(path)?;
        let credentials = Credentials::from_manager(&manager)?;
        Ok(Config {
            api_url: env::var("DYNECT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(
                env::var("DYNECT_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
            credentials,
        })
    }
}
