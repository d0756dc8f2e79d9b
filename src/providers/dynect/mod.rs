//! DynECT REST API provider

pub mod client;
pub mod error;
pub mod types;


pub use client::{DynectConfig, DynectProvider};

use crate::auth::credentials::Credentials;
use crate::core::provider::SessionClient;
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;

#[async_trait]
impl SessionClient for DynectProvider {
    async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        DynectProvider::login(self, credentials)
            .await
            .map_err(map_error)
    }

    async fn zone_uris(&self) -> Result<Vec<String>, Error> {
        self.list_zones().await.map_err(map_error)
    }

    async fn node_uris(&self, zone: &str, fqdn: &str) -> Result<Vec<String>, Error> {
        self.list_nodes(zone, fqdn).await.map_err(map_error)
    }

    async fn logout(&self) -> Result<(), Error> {
        DynectProvider::logout(self).await.map_err(map_error)
    }
}
