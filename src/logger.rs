// Network logger plugin.
// Traces every request and response passing through the provider.

use reqwest::{
    header::{HeaderMap, AUTHORIZATION},
    Request, StatusCode,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::target::GitHub;

/// Pretty-print `data` if it is JSON; hand it back untouched otherwise.
pub fn json_response_data_formatter(data: &[u8]) -> Vec<u8> {
    match serde_json::from_slice::<Value>(data).and_then(|json| serde_json::to_vec_pretty(&json)) {
        Ok(pretty) => pretty,
        Err(_) => data.to_vec(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkLogger {
    pub verbose: bool,
}

impl NetworkLogger {
    pub fn new(verbose: bool) -> Self {
        NetworkLogger { verbose }
    }

    pub fn will_send(&self, target: &GitHub, request: &Request) {
        info!("Request {}: {} {}", target, request.method(), request.url());
        if self.verbose {
            debug!("Request headers: {:?}", redacted(request.headers()));
        }
    }

    pub fn did_receive(&self, target: &GitHub, status: StatusCode, url: &str, body: &[u8]) {
        if status.is_success() {
            info!("Response {}: {} from {}", target, status, url);
        } else {
            warn!("Response {}: {} from {}", target, status, url);
        }

        if self.verbose {
            let formatted = json_response_data_formatter(body);
            debug!("Response body:\n{}", String::from_utf8_lossy(&formatted));
        }
    }
}

/// Header pairs as loggable strings, with credentials masked.
fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                "<redacted>".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, ACCEPT};

    #[test]
    fn test_formatter_pretty_prints_json() {
        let pretty = json_response_data_formatter(br#"{"login":"octocat","id":1}"#);
        let text = String::from_utf8(pretty).unwrap();
        assert!(text.contains('\n'));
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed["login"], "octocat");
    }

    #[test]
    fn test_formatter_passes_non_json_through() {
        let raw = b"# README\nnot json";
        assert_eq!(json_response_data_formatter(raw), raw.to_vec());
        assert!(json_response_data_formatter(b"").is_empty());
    }

    #[test]
    fn test_authorization_header_is_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("token secret"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let pairs = redacted(&headers);
        assert!(pairs.contains(&("authorization".to_string(), "<redacted>".to_string())));
        assert!(pairs.contains(&("accept".to_string(), "application/json".to_string())));
        assert!(!format!("{:?}", pairs).contains("secret"));
    }
}
