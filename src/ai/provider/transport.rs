//! Request Transport
//!
//! Chooses between a direct vendor call and a forwarding relay. The
//! relay exists solely to route around origin restrictions in hosted
//! environments; it never alters request or response semantics. The
//! relay accepts `{provider, apiKey, model, body}` and forwards `body`
//! verbatim to the vendor, returning the vendor's raw response.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::ProviderKind;
use crate::types::{FramedocError, Result};

/// A fully shaped vendor request, ready to send.
#[derive(Debug, Clone)]
pub struct VendorRequest {
    pub url: String,
    /// Vendor headers including auth; applied on direct calls only
    /// (the relay injects auth from the envelope)
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

/// Envelope posted to the relay endpoint.
#[derive(Serialize)]
struct RelayEnvelope<'a> {
    provider: &'static str,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    model: &'a str,
    body: &'a Value,
}

/// Direct-to-vendor or via relay.
#[derive(Debug, Clone)]
pub enum Transport {
    Direct,
    Relay { endpoint: Url },
}

impl Transport {
    /// Send the request and return the raw response body on 2xx.
    ///
    /// Non-2xx statuses become `Api { status, body }`; requests that never
    /// complete become `Network`.
    pub async fn dispatch(
        &self,
        client: &reqwest::Client,
        kind: ProviderKind,
        api_key: &SecretString,
        model: &str,
        request: &VendorRequest,
    ) -> Result<String> {
        let response = match self {
            Self::Direct => {
                debug!("Dispatching direct {} request", kind);
                let mut builder = client.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(*name, value);
                }
                builder.json(&request.body).send().await
            }
            Self::Relay { endpoint } => {
                debug!("Dispatching {} request via relay", kind);
                let envelope = RelayEnvelope {
                    provider: kind.as_str(),
                    api_key: api_key.expose_secret(),
                    model,
                    body: &request.body,
                };
                client.post(endpoint.clone()).json(&envelope).send().await
            }
        }
        .map_err(FramedocError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(FramedocError::network)?;

        if !status.is_success() {
            return Err(FramedocError::Api {
                provider: kind.as_str().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_envelope_shape() {
        let body = json!({"model": "m", "messages": []});
        let envelope = RelayEnvelope {
            provider: "anthropic",
            api_key: "sk-test",
            model: "m",
            body: &body,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["provider"], "anthropic");
        assert_eq!(value["apiKey"], "sk-test");
        assert_eq!(value["model"], "m");
        // forwarded verbatim
        assert_eq!(value["body"], body);
    }
}
