/// Prompt construction and defensive parsing for similar-site suggestions
///
/// The remote model is instructed to answer with a single JSON object of the
/// shape `{"similarWebsites": ["https://...", ...]}`. Every stage here
/// assumes the service can misbehave anyway (prose instead of JSON, wrong
/// shape, junk entries) and degrades to an empty list rather than erroring:
/// only the HTTP layer in `client` produces a user-visible failure.
use crate::api::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    ResponseSchema,
};

/// The single key the model must use in its JSON reply.
pub const SUGGESTION_KEY: &str = "similarWebsites";

/// Maximum number of suggestions requested from the model. The prompt caps
/// the count; nothing is re-enforced client-side.
pub const MAX_SUGGESTIONS: usize = 5;

/// Build the instruction sent to the model for the given page URL.
pub fn build_prompt(url: &str) -> String {
    format!(
        "List up to {MAX_SUGGESTIONS} websites that are similar to {url}. \
         Respond with a single JSON object containing one key, \
         \"{SUGGESTION_KEY}\", whose value is an array of fully-qualified \
         URL strings. If you cannot find any similar websites, use an \
         empty array."
    )
}

/// Build the full request body, or `None` when the URL is blank. A blank
/// URL means there is nothing to ask about and no network call is made.
pub fn build_request(url: &str) -> Option<GenerateContentRequest> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    Some(GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part::text(build_prompt(url))],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: ResponseSchema::object_with_string_array(SUGGESTION_KEY),
        },
    })
}

/// Turn a 2xx response body into a list of validated suggestion URLs.
/// Any shape violation along the way is logged and yields an empty list.
pub fn parse_success_body(body: &str) -> Vec<String> {
    let envelope: GenerateContentResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::warn!("Response body is not a valid envelope: {}", e);
            return Vec::new();
        }
    };

    extract_suggestions(&envelope)
}

/// Walk the envelope for the first candidate part carrying non-empty text
/// and decode it. No usable part means no data, not an error.
pub fn extract_suggestions(envelope: &GenerateContentResponse) -> Vec<String> {
    let text = envelope
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.is_empty());

    match text {
        Some(text) => parse_suggestion_text(text),
        None => {
            log::warn!("Envelope contained no candidate text");
            Vec::new()
        }
    }
}

/// Decode the model's inner JSON and filter it down to usable URLs. The
/// agreed key must hold an array; elements that are not non-empty
/// http/https strings are dropped silently (routine filtering, not logged).
pub fn parse_suggestion_text(text: &str) -> Vec<String> {
    let payload: serde_json::Value = match serde_json::from_str(text) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Candidate text is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(entries) = payload.get(SUGGESTION_KEY).and_then(|v| v.as_array()) else {
        log::warn!("Candidate JSON has no \"{}\" array", SUGGESTION_KEY);
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.as_str())
        .filter(|url| is_valid_suggestion(url))
        .map(|url| url.to_string())
        .collect()
}

/// A usable suggestion is a non-empty string with an explicit http or
/// https scheme.
pub fn is_valid_suggestion(url: &str) -> bool {
    !url.is_empty() && (url.starts_with("http://") || url.starts_with("https://"))
}
