use crate::auth::credentials::Credentials;
use crate::error::Error;
use async_trait::async_trait;

/// An authenticated connection to a DNS hosting API.
///
/// Implementations keep the session token themselves; once `login` succeeds
/// every later call runs inside that session until `logout`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionClient: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<(), Error>;
    /// Resource URIs of every zone on the account.
    async fn zone_uris(&self) -> Result<Vec<String>, Error>;
    /// Resource URIs of every node at or below `fqdn` in `zone`.
    async fn node_uris(&self, zone: &str, fqdn: &str) -> Result<Vec<String>, Error>;
    async fn logout(&self) -> Result<(), Error>;
}
