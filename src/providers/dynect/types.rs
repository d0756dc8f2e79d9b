use serde::{Deserialize, Serialize};
use std::fmt;

pub const STATUS_SUCCESS: &str = "success";

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub customer_name: &'a str,
    pub user_name: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SessionData {
    pub token: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Envelope wrapping every API response.
///
/// `data` stays untyped until `status` is known to be a success, because
/// failed calls return an empty object there.
#[derive(Deserialize, Debug)]
pub struct DynectResponse {
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub job_id: Option<u64>,
    #[serde(default)]
    pub msgs: Vec<DynectMessage>,
}

impl DynectResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DynectMessage {
    #[serde(rename = "LVL", default)]
    pub level: String,
    #[serde(rename = "ERR_CD", default)]
    pub err_code: Option<String>,
    #[serde(rename = "SOURCE", default)]
    pub source: String,
    #[serde(rename = "INFO", default)]
    pub info: String,
}

impl fmt::Display for DynectMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.level)?;
        if let Some(code) = self.err_code.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "({code}) ")?;
        }
        write!(f, "{} - {}", self.source, self.info)
    }
}

pub fn join_messages(msgs: &[DynectMessage]) -> String {
    msgs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
