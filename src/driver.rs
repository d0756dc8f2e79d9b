use crate::auth::credentials::Credentials;
use crate::core::provider::SessionClient;
use crate::core::uri::zone_from_fqdn;
use crate::error::Error;
use crate::inventory::{list_nodes, list_zones};
use crate::output::OutputWriter;
use log::{error, info, warn};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Zones,
    /// Every node of every zone, or only those at or below `fqdn`.
    Nodes { fqdn: Option<String> },
}

/// Logs in, writes the requested names to `console` (and `file`) and logs
/// out again.
///
/// Only a failed login (or a failed write) aborts the run. `file` is not
/// touched unless login succeeds. Enumeration failures are logged and count
/// as empty results. Returns how many names were written, and the console.
pub async fn run<W: Write>(
    session: &dyn SessionClient,
    credentials: &Credentials,
    mode: &Mode,
    console: W,
    file: Option<&Path>,
) -> Result<(usize, W), Error> {
    session.login(credentials).await?;
    info!(
        "Logged in as {} for customer {}",
        credentials.user, credentials.customer
    );

    let mut out = OutputWriter::new(console, file);
    if let Some(file) = file.filter(|_| out.has_file()) {
        info!("Writing names to {}", file.display());
    }

    let written = emit(session, mode, &mut out).await;

    if let Err(e) = session.logout().await {
        warn!("Logout failed: {e}");
    }
    let written = written?;
    Ok((written, out.finish()?))
}

async fn emit<W: Write>(
    session: &dyn SessionClient,
    mode: &Mode,
    out: &mut OutputWriter<W>,
) -> Result<usize, Error> {
    let mut written = 0;
    match mode {
        Mode::Zones => {
            for zone in zones_or_empty(session).await {
                out.write_name(&zone)?;
                written += 1;
            }
        }
        Mode::Nodes { fqdn: Some(fqdn) } => {
            let zone = zone_from_fqdn(fqdn)?;
            for node in nodes_or_empty(session, &zone, Some(fqdn)).await {
                out.write_name(&node)?;
                written += 1;
            }
        }
        Mode::Nodes { fqdn: None } => {
            for zone in zones_or_empty(session).await {
                for node in nodes_or_empty(session, &zone, None).await {
                    out.write_name(&node)?;
                    written += 1;
                }
            }
        }
    }
    Ok(written)
}

async fn zones_or_empty(session: &dyn SessionClient) -> Vec<String> {
    list_zones(session).await.unwrap_or_else(|e| {
        error!("Failed to retrieve zone list: {e}");
        Vec::new()
    })
}

async fn nodes_or_empty(
    session: &dyn SessionClient,
    zone: &str,
    fqdn: Option<&str>,
) -> Vec<String> {
    list_nodes(session, zone, fqdn).await.unwrap_or_else(|e| {
        error!("Failed to get node list for {zone}: {e}");
        Vec::new()
    })
}
