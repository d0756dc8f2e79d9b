use std::fmt;

#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    ConfigError(String),
    CredentialError(String),
    ProviderError(String),
    InvalidInput(String),
    OutputError(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Error reading config file: {msg}"),
            Error::CredentialError(msg) => write!(f, "Incorrect credentials: {msg}"),
            Error::ProviderError(msg) => write!(f, "Provider error: {msg}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::OutputError(err.to_string())
    }
}
