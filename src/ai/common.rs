use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use super::error::UpstreamError;
use crate::text_utils::truncate_graphemes;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Build a single-turn `generateContent` body.
///
/// `json_reply` asks the model for `application/json` output.
pub fn build_generate_body(prompt: &str, temperature: Option<f32>, json_reply: bool) -> GenerateRequest {
    let generation_config = (temperature.is_some() || json_reply).then(|| GenerationConfig {
        temperature,
        response_mime_type: json_reply.then_some("application/json"),
    });
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        generation_config,
    }
}

pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!("{}/models/{model}:generateContent", base_url.trim_end_matches('/'))
}

/// Extract the reply text from a raw `generateContent` response.
pub fn parse_candidate_text(raw: &str) -> Result<String, UpstreamError> {
    let response: GenerateResponse = serde_json::from_str(raw)?;
    let candidate = response.candidates.into_iter().next().ok_or(UpstreamError::Empty)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(UpstreamError::Blocked);
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(UpstreamError::Empty);
    }
    Ok(text)
}

/// POST a body to Gemini and return the raw response text on success.
#[instrument(level = "trace", skip(api_key, body))]
pub async fn send_gemini_request(
    api_key: &str,
    url: &str,
    body: &GenerateRequest,
) -> Result<String, UpstreamError> {
    if api_key.trim().is_empty() {
        return Err(UpstreamError::MissingCredential);
    }

    debug!(url, "sending generateContent request");

    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(60))
        .build()?;
    let resp = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .json(body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Gemini API error");
        return Err(UpstreamError::from_status(status.as_u16(), err_text));
    }

    let raw = resp.text().await?;
    let snippet = truncate_graphemes(&raw, 200);
    debug!(snippet = %snippet, "generateContent response body");
    trace!(raw = %raw, "generateContent response");
    Ok(raw)
}

/// Send one prompt and return the model's text reply.
#[instrument(level = "trace", skip(api_key, prompt))]
pub async fn generate_text(
    api_key: &str,
    model: &str,
    prompt: &str,
    json_reply: bool,
    base_url: Option<&str>,
) -> Result<String, UpstreamError> {
    let url = generate_content_url(base_url.unwrap_or(GEMINI_API_URL), model);
    let body = build_generate_body(prompt, Some(0.7), json_reply);
    let raw = send_gemini_request(api_key, &url, &body).await?;
    parse_candidate_text(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_shape() {
        let body = serde_json::to_value(build_generate_body("hi", None, true)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{"parts": [{"text": "hi"}]}],
                "generationConfig": {"responseMimeType": "application/json"}
            })
        );
        let plain = serde_json::to_value(build_generate_body("hi", None, false)).unwrap();
        assert!(plain.get("generationConfig").is_none());
    }

    #[test]
    fn url_joins_model() {
        assert_eq!(
            generate_content_url("http://x/v1beta/", "m"),
            "http://x/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn candidate_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"TITLE: A\n"},{"text":"CONTENT: b"}]},"finishReason":"STOP"}]}"#;
        assert_eq!(parse_candidate_text(raw).unwrap(), "TITLE: A\nCONTENT: b");
    }

    #[test]
    fn candidate_errors() {
        assert!(matches!(
            parse_candidate_text(r#"{"candidates":[]}"#),
            Err(UpstreamError::Empty)
        ));
        assert!(matches!(
            parse_candidate_text(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#),
            Err(UpstreamError::Blocked)
        ));
        assert!(matches!(
            parse_candidate_text("not json"),
            Err(UpstreamError::Malformed(_))
        ));
    }
}
