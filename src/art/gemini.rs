//! Image generation through the Gemini `generateContent` REST endpoint.

use serde::Deserialize;
use serde_json::json;

use super::types::{ArtError, ImageGenerator, ImagePayload};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Prompt sent for `subject`.
pub fn ink_prompt(subject: &str) -> String {
    format!(
        "Traditional Chinese ink wash painting of {}. Sumi-e style, heavy black brush strokes, \
         minimalist, negative space, white background, masterpiece, game icon",
        subject
    )
}

/// Pulls the first inline image out of the first candidate.
pub(crate) fn extract_image(response: GenerateResponse) -> Result<ImagePayload, ArtError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .unwrap_or_default()
        .parts
        .into_iter()
        .find_map(|p| p.inline_data)
        .map(|inline| ImagePayload {
            mime_type: inline.mime_type.unwrap_or_else(|| "image/png".to_string()),
            data: inline.data,
        })
        .ok_or(ArtError::NoImage)
}

/// Maps a non-success HTTP status to an error. Permission failures and
/// bodies complaining about the key ask for a new credential.
pub(crate) fn classify_status(status: u16, body: &str) -> ArtError {
    let lower = body.to_ascii_lowercase();
    if status == 401 || status == 403 || lower.contains("api key") || lower.contains("api_key") {
        ArtError::Credential { status }
    } else {
        ArtError::Http {
            status,
            message: body.chars().take(200).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiImageGenerator {
    api_key: Option<String>,
    model: String,
}

impl GeminiImageGenerator {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

impl ImageGenerator for GeminiImageGenerator {
    fn generate(&mut self, subject: &str) -> Result<ImagePayload, ArtError> {
        let api_key = self.api_key.as_deref().ok_or(ArtError::MissingCredential)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": ink_prompt(subject) }] }],
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": { "aspectRatio": "1:1", "imageSize": "1K" }
            }
        });

        let response = match ureq::post(&self.endpoint())
            .set("x-goog-api-key", api_key)
            .set("User-Agent", "inkblade")
            .send_json(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                return Err(classify_status(status, &text));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ArtError::Transport(transport.to_string()));
            }
        };

        let parsed: GenerateResponse = response
            .into_json()
            .map_err(|e| ArtError::Decode(e.to_string()))?;
        extract_image(parsed)
    }

    fn set_credential(&mut self, api_key: String) {
        let key = api_key.trim().to_string();
        self.api_key = (!key.is_empty()).then_some(key);
    }
}
