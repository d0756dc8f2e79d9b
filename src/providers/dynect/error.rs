use crate::providers::dynect::types::{DynectMessage, join_messages};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynectProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API call returned `{status}`: {}", join_messages(.msgs))]
    Api {
        status: String,
        msgs: Vec<DynectMessage>,
    },

    #[error("Unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Credential(String),
}

use crate::error::Error;

pub fn map_error(e: DynectProviderError) -> Error {
    use DynectProviderError::*;
    match e {
        Credential(msg) => Error::CredentialError(msg),
        other => Error::ProviderError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_map_error_variants() {
        use DynectProviderError::*;

        let err = map_error(Credential("fail".to_string()));
        assert!(matches!(err, Error::CredentialError(_)));
        let err = map_error(Status(StatusCode::BAD_GATEWAY));
        assert!(matches!(err, Error::ProviderError(_)));
        let err = map_error(Api {
            status: "failure".to_string(),
            msgs: vec![],
        });
        assert!(matches!(err, Error::ProviderError(_)));
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = map_error(Decode(decode));
        assert!(matches!(err, Error::ProviderError(_)));
    }

    #[test]
    fn test_api_error_lists_messages() {
        let err = DynectProviderError::Api {
            status: "failure".to_string(),
            msgs: vec![DynectMessage {
                level: "ERROR".into(),
                err_code: Some("NOT_FOUND".into()),
                source: "BLL".into(),
                info: "zone: No such zone".into(),
            }],
        };
        assert_eq!(
            err.to_string(),
            "API call returned `failure`: ERROR: (NOT_FOUND) BLL - zone: No such zone"
        );
    }
}
