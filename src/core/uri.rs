use crate::error::Error;

/// Returns the last segment of a resource URI such as `/REST/Zone/a.com/`.
///
/// Surrounding slashes are ignored, so `a.com` and `/a.com/` both give
/// `a.com`. A URI made only of slashes gives the empty string.
pub fn short_name(uri: &str) -> &str {
    uri.trim_matches('/').rsplit('/').next().unwrap_or_default()
}

/// Zone that a hostname belongs to, taken as its last two labels.
pub fn zone_from_fqdn(fqdn: &str) -> Result<String, Error> {
    let labels: Vec<&str> = fqdn.trim_end_matches('.').split('.').collect();
    match labels.as_slice() {
        [.., domain, tld] if !domain.is_empty() && !tld.is_empty() => {
            Ok(format!("{domain}.{tld}"))
        }
        _ => Err(Error::InvalidInput(format!(
            "cannot derive a zone from `{fqdn}`"
        ))),
    }
}
