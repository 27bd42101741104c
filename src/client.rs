/// One-shot HTTP client for the generative-language API
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::api::ApiError;
use crate::suggest;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Injected API configuration. An empty key is legitimate: the hosting
/// environment may inject auth transparently, so the key parameter is sent
/// either way and never hardcoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub api_key: String,
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_key(api_key: impl Into<String>) -> ApiConfig {
        ApiConfig {
            api_key: api_key.into(),
            ..ApiConfig::default()
        }
    }

    /// Endpoint URL for a generateContent call.
    pub fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        )
    }
}

/// Ask the model for websites similar to `url`.
///
/// Returns `Err` only for transport-level failure (network error or a
/// non-2xx status); every malformed-response case degrades to `Ok` with an
/// empty list, logged but not surfaced as an error. A blank URL short
/// circuits to an empty list without touching the network.
pub async fn fetch_similar_sites(config: &ApiConfig, url: &str) -> Result<Vec<String>, String> {
    let Some(request) = suggest::build_request(url) else {
        return Ok(Vec::new());
    };

    let body = serde_json::to_string(&request)
        .map_err(|e| format!("Failed to encode request: {}", e))?;

    let (status, text) = post_json(&config.request_url(), &body).await?;

    if let Some((detail, message)) = transport_failure(status, &text) {
        log::error!("Similarity request failed: status {}: {}", status, detail);
        return Err(message);
    }

    Ok(suggest::parse_success_body(&text))
}

/// Classify a response status. A 2xx is `None`; anything else yields the
/// diagnostic detail for the log and the generic user-facing message. The
/// structured error message is preferred when the body carries one,
/// otherwise the raw body stands in as the diagnostic.
fn transport_failure(status: u16, body: &str) -> Option<(String, String)> {
    if (200..300).contains(&status) {
        return None;
    }

    let detail = match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => api_error.error.message,
        Err(_) => body.to_string(),
    };
    Some((detail, format!("Request failed with status {}", status)))
}

/// POST a JSON body through the browser fetch API and collect the status
/// and the full response text.
async fn post_json(url: &str, body: &str) -> Result<(u16, String), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to build request: {:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set headers: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Network request failed: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("Fetch returned a non-Response value: {:?}", e))?;

    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|e| format!("Failed to read response body: {:?}", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("Failed to read response body: {:?}", e))?
        .as_string()
        .unwrap_or_default();

    Ok((status, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_with_explicit_key() {
        let config = ApiConfig::with_key("secret");
        assert_eq!(
            config.request_url(),
            format!(
                "{}/models/{}:generateContent?key=secret",
                BASE_URL, DEFAULT_MODEL
            )
        );
    }

    #[test]
    fn test_request_url_with_host_injected_auth() {
        // An empty key still produces the key parameter; the host fills it in.
        let config = ApiConfig::default();
        assert!(config.request_url().ends_with("?key="));
    }

    #[test]
    fn test_request_url_uses_configured_model() {
        let config = ApiConfig {
            api_key: "k".to_string(),
            model: "gemini-2.0-pro".to_string(),
        };
        assert!(config.request_url().contains("/models/gemini-2.0-pro:"));
    }

    #[test]
    fn test_success_statuses_are_not_failures() {
        assert!(transport_failure(200, "ignored").is_none());
        assert!(transport_failure(204, "").is_none());
    }

    #[test]
    fn test_failure_prefers_structured_error_message() {
        let body = serde_json::json!({
            "error": {
                "code": 500,
                "message": "Internal error encountered.",
                "status": "INTERNAL"
            }
        })
        .to_string();

        let (detail, message) = transport_failure(500, &body).unwrap();
        assert_eq!(detail, "Internal error encountered.");
        assert_eq!(message, "Request failed with status 500");
    }

    #[test]
    fn test_failure_falls_back_to_raw_body() {
        let (detail, message) = transport_failure(500, "<html>Server Error</html>").unwrap();
        assert_eq!(detail, "<html>Server Error</html>");
        assert_eq!(message, "Request failed with status 500");
    }

    #[test]
    fn test_client_errors_are_failures_too() {
        let (_, message) = transport_failure(403, "Forbidden").unwrap();
        assert_eq!(message, "Request failed with status 403");
    }
}
