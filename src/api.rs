/// Wire types for the Gemini generateContent endpoint
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One part of a content block. Requests only ever send text; responses may
/// carry parts without a text field, which deserialize as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Part {
        Part {
            text: Some(text.into()),
        }
    }
}

/// Content block in a request or a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Schema descriptor sent with the request to constrain the model to
/// structured JSON output. Uses the API's uppercase type names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, ResponseSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    pub fn string() -> ResponseSchema {
        ResponseSchema {
            schema_type: "STRING".to_string(),
            properties: None,
            items: None,
            required: Vec::new(),
        }
    }

    pub fn string_array() -> ResponseSchema {
        ResponseSchema {
            schema_type: "ARRAY".to_string(),
            properties: None,
            items: Some(Box::new(ResponseSchema::string())),
            required: Vec::new(),
        }
    }

    /// An object with a single required array-of-strings field.
    pub fn object_with_string_array(key: &str) -> ResponseSchema {
        let mut properties = BTreeMap::new();
        properties.insert(key.to_string(), ResponseSchema::string_array());
        ResponseSchema {
            schema_type: "OBJECT".to_string(),
            properties: Some(properties),
            items: None,
            required: vec![key.to_string()],
        }
    }
}

/// Generation configuration. Only the structured-output fields are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: ResponseSchema,
}

/// Request body for generateContent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// Response envelope. Every field defaults so a partial or oddly shaped
/// success body still decodes instead of erroring.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated completion in the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub status: String,
}
