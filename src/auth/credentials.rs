use crate::error::Error;
use ini::{Ini, ParseOption};
use std::collections::HashMap;
use std::path::Path;

pub const SECTION: &str = "Dynect";

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Account details used to open an API session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub customer: String,
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn from_manager(manager: &dyn CredentialManager) -> Result<Self, Error> {
        Ok(Credentials {
            customer: manager.get("customer")?,
            user: manager.get("user")?,
            password: manager.get("password")?,
        })
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer", &self.customer)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// INI-file credential provider reading the `[Dynect]` section.
#[cfg_attr(test, derive(Debug))]
pub struct IniCredentialManager {
    source: String,
    values: HashMap<String, String>,
}

/// Values are taken verbatim: no escape sequences, no quote stripping.
pub fn raw_values() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        enabled_quote: false,
        ..Default::default()
    }
}

impl IniCredentialManager {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let ini = Ini::load_from_file_opt(path, raw_values())
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_ini(&ini, &path.display().to_string())
    }

    pub fn from_ini(ini: &Ini, source: &str) -> Result<Self, Error> {
        let section = ini.section(Some(SECTION)).ok_or_else(|| {
            Error::ConfigError(format!("{source}: missing [{SECTION}] section"))
        })?;
        let values = section
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim().to_string()))
            .collect();
        Ok(Self {
            source: source.to_string(),
            values,
        })
    }
}

impl CredentialManager for IniCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        match self.values.get(key) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            Some(_) => Err(Error::ConfigError(format!(
                "{}: `{key}` in [{SECTION}] is empty",
                self.source
            ))),
            None => Err(Error::ConfigError(format!(
                "{}: `{key}` missing from [{SECTION}]",
                self.source
            ))),
        }
    }
}
