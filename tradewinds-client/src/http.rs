//! Blocking HTTP layer for the remote game API.
//!
//! One client per configuration: the bearer token is turned into a
//! header map once at construction and attached to every request.

use crate::config::{ClientConfig, ConfigError};
use crate::error::ClientError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;
use tradewinds_core::ErrorEnvelope;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    auth_header: HeaderMap,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let auth_header = build_auth_headers(&config.agent_token)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub(crate) fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url).headers(self.auth_header.clone());
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send()?;
        self.parse_response(response)
    }

    fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>()?)
        } else {
            let text = response.text()?;
            Err(error_from_parts(status, text))
        }
    }
}

/// Map a non-success response to the richest error the body supports.
fn error_from_parts(status: reqwest::StatusCode, text: String) -> ClientError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&text) {
        return ClientError::Api {
            status: status.as_u16(),
            code: envelope.error.code,
            message: envelope.error.message,
        };
    }
    ClientError::UnexpectedResponse(format!("HTTP {}: {}", status.as_u16(), text))
}

fn build_auth_headers(token: &str) -> Result<HeaderMap, ConfigError> {
    let value = format!("Bearer {}", token);
    let value = HeaderValue::from_str(&value).map_err(|err| ConfigError::InvalidValue {
        field: "agent_token",
        reason: err.to_string(),
    })?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use std::path::PathBuf;

    fn base_config() -> ClientConfig {
        ClientConfig {
            api_base_url: "https://api.example.test/v2/".to_string(),
            agent_token: "token-123".to_string(),
            callsign: "WINDJAMMER".to_string(),
            cache_dir: PathBuf::from("tmp/cache"),
            request_timeout_ms: 1_000,
        }
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ApiClient::new(&base_config()).expect("build client");
        assert_eq!(client.base_url, "https://api.example.test/v2");
    }

    #[test]
    fn test_new_builds_bearer_header() {
        let client = ApiClient::new(&base_config()).expect("build client");
        let value = client
            .auth_header
            .get(AUTHORIZATION)
            .expect("authorization header");
        assert_eq!(value.to_str().expect("header text"), "Bearer token-123");
    }

    #[test]
    fn test_new_rejects_token_with_control_chars() {
        let mut config = base_config();
        config.agent_token = "bad\ntoken".to_string();
        let err = ApiClient::new(&config).expect_err("token must be header-safe");
        assert!(matches!(
            err,
            ClientError::Config(ConfigError::InvalidValue {
                field: "agent_token",
                ..
            })
        ));
    }

    #[test]
    fn test_error_from_parts_decodes_api_envelope() {
        let body = r#"{"error":{"code":4504,"message":"contract not found"}}"#;
        let err = error_from_parts(reqwest::StatusCode::NOT_FOUND, body.to_string());
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, 4504);
                assert_eq!(message, "contract not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_parts_falls_back_to_raw_body() {
        let err = error_from_parts(
            reqwest::StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>".to_string(),
        );
        match err {
            ClientError::UnexpectedResponse(text) => {
                assert_eq!(text, "HTTP 502: <html>bad gateway</html>");
            }
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
    }
}
