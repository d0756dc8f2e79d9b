use crate::core::provider::SessionClient;
use crate::core::uri::short_name;
use crate::error::Error;

fn short_names(uris: &[String]) -> Vec<String> {
    uris.iter().map(|uri| short_name(uri).to_string()).collect()
}

/// Names of every zone on the account.
pub async fn list_zones(session: &dyn SessionClient) -> Result<Vec<String>, Error> {
    let uris = session.zone_uris().await?;
    Ok(short_names(&uris))
}

/// Names of the nodes in `zone`, at or below `fqdn` when given and below the
/// zone apex otherwise.
pub async fn list_nodes(
    session: &dyn SessionClient,
    zone: &str,
    fqdn: Option<&str>,
) -> Result<Vec<String>, Error> {
    let uris = session.node_uris(zone, fqdn.unwrap_or(zone)).await?;
    Ok(short_names(&uris))
}
