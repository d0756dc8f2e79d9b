//! Command-line arguments.

use crate::config::DEFAULT_CREDENTIALS_FILE;
use crate::core::uri::zone_from_fqdn;
use crate::driver::Mode;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Print every zone, or every node, managed in a DynECT account
///
/// Credentials are read from the [Dynect] section (keys `customer`, `user`,
/// `password`) of the credentials file.
#[derive(Parser, Debug)]
#[command(name = "dynect-zones", version)]
#[command(group(ArgGroup::new("mode").required(true).args(["zones", "nodes"])))]
pub struct Cli {
    /// Output all zones
    #[arg(short, long)]
    pub zones: bool,

    /// Output all nodes
    #[arg(short, long)]
    pub nodes: bool,

    /// Only output nodes at or below this hostname
    #[arg(long, value_name = "FQDN", requires = "nodes", value_parser = parse_fqdn)]
    pub fqdn: Option<String>,

    /// File to output list to
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Credentials file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CREDENTIALS_FILE)]
    pub config: PathBuf,
}

fn parse_fqdn(value: &str) -> Result<String, String> {
    zone_from_fqdn(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.zones {
            Mode::Zones
        } else {
            Mode::Nodes {
                fqdn: self.fqdn.clone(),
            }
        }
    }
}
