//! Gemini client: the production image generator and scene planner.
//!
//! Speaks the `generateContent` REST shape. Every request is a list of
//! content parts (text and/or inline image data) plus a generation config;
//! image calls ask for `responseModalities: ["IMAGE"]` and scan the reply's
//! parts for the first inline image, while the planner call asks for
//! structured JSON matching the [`ScenePlan`] schema and validates the
//! reply against that schema before trusting it.
//!
//! | Call | Model | Request parts | Reply |
//! |------|-------|---------------|-------|
//! | generate | image model | instruction text | inline PNG data |
//! | restyle | image model | photo + instruction | inline PNG data |
//! | plan_scenes | planner model | scene instruction | JSON scene list |

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::api::{CollabError, CollabFuture, ImageGenerator, ScenePlanner, UploadPayload};
use crate::options::AgeGroup;
use crate::prompt::build_scene_instruction_prompt;
use crate::story::{ScenePlan, StoryScript};
use crate::{Artifact, GEMINI_API_URL, IMAGE_MODEL, PLANNER_MODEL, json_schema_for};

// ── Request types ──────────────────────────────────────────────────

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One content part. Exactly one of the fields is set per part.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// Image calls: the reply must be an image.
    fn image_only() -> Self {
        Self {
            response_modalities: Some(vec!["IMAGE".into()]),
            ..Self::default()
        }
    }

    /// Planner call: structured JSON matching the given schema.
    fn structured_json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".into()),
            response_schema: Some(schema),
            ..Self::default()
        }
    }
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawGenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<RawApiError>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct RawApiError {
    message: String,
}

/// First inline image in the first candidate, as a data-URI artifact.
fn first_image(response: &RawGenerateResponse) -> Option<Artifact> {
    let candidate = response.candidates.as_ref()?.first()?;
    let parts = &candidate.content.as_ref()?.parts;
    parts.iter().find_map(|part| {
        part.inline_data
            .as_ref()
            .map(|inline| Artifact::png_from_base64(&inline.data))
    })
}

/// First text part in the first candidate.
fn first_text(response: &RawGenerateResponse) -> Option<&str> {
    let candidate = response.candidates.as_ref()?.first()?;
    let parts = &candidate.content.as_ref()?.parts;
    parts.iter().find_map(|part| part.text.as_deref())
}

/// Parses and validates the planner's JSON reply into a scene script.
///
/// The payload is checked against the [`ScenePlan`] schema first so the
/// error names the offending field, then the count and blank-scene rules
/// are enforced by [`StoryScript::from_scenes`].
fn validate_scene_payload(payload: &str) -> Result<StoryScript, CollabError> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| CollabError::MalformedPlan(format!("invalid JSON: {e}")))?;

    let schema = json_schema_for::<ScenePlan>();
    // If the schema itself fails to compile, fall through to plain parsing.
    if let Ok(validator) = jsonschema::validator_for(&schema) {
        let errors: Vec<String> = validator
            .iter_errors(&value)
            .map(|e| format!("{}: {e}", e.instance_path()))
            .collect();
        if !errors.is_empty() {
            return Err(CollabError::MalformedPlan(errors.join("; ")));
        }
    }

    let plan: ScenePlan = serde_json::from_value(value)
        .map_err(|e| CollabError::MalformedPlan(format!("unexpected shape: {e}")))?;
    StoryScript::from_scenes(plan.scenes).ok_or_else(|| {
        CollabError::MalformedPlan(format!(
            "expected exactly {} non-empty scenes",
            crate::story::STORY_SCENE_COUNT
        ))
    })
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    image_model: String,
    planner_model: String,
}

impl GeminiClient {
    /// Client with the given API key and the standard models.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CollabError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kredka/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            image_model: IMAGE_MODEL.into(),
            planner_model: PLANNER_MODEL.into(),
        })
    }

    /// Override the image and planner models.
    pub fn with_models(
        mut self,
        image_model: impl Into<String>,
        planner_model: impl Into<String>,
    ) -> Self {
        self.image_model = image_model.into();
        self.planner_model = planner_model.into();
        self
    }

    /// Send one `generateContent` request and decode the envelope.
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<RawGenerateResponse, CollabError> {
        let part_count: usize = request.contents.iter().map(|c| c.parts.len()).sum();
        debug!("Gemini request: model={model}, parts={part_count}");
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(request).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(format!("{GEMINI_API_URL}/{model}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        debug!(
            "Gemini response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(CollabError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: RawGenerateResponse = serde_json::from_str(&text)?;
        if let Some(err) = parsed.error {
            return Err(CollabError::Api {
                status: status.as_u16(),
                body: err.message,
            });
        }
        Ok(parsed)
    }
}

impl ImageGenerator for GeminiClient {
    fn generate(&self, instruction: &str) -> CollabFuture<'_, Artifact> {
        let instruction = instruction.to_string();
        Box::pin(async move {
            let request = GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part::text(instruction)],
                }],
                generation_config: Some(GenerationConfig::image_only()),
            };
            let response = self.generate_content(&self.image_model, &request).await?;
            first_image(&response).ok_or(CollabError::EmptyResponse)
        })
    }

    fn restyle(&self, upload: &UploadPayload, instruction: &str) -> CollabFuture<'_, Artifact> {
        // Part order matters to the model: the photo first, then the
        // conversion instruction.
        let parts = vec![
            Part::inline(upload.mime_type(), upload.base64()),
            Part::text(instruction),
        ];
        Box::pin(async move {
            let request = GenerateContentRequest {
                contents: vec![Content { parts }],
                generation_config: Some(GenerationConfig::image_only()),
            };
            let response = self.generate_content(&self.image_model, &request).await?;
            first_image(&response).ok_or(CollabError::EmptyResponse)
        })
    }
}

impl ScenePlanner for GeminiClient {
    fn plan_scenes(&self, theme: &str, age_group: AgeGroup) -> CollabFuture<'_, StoryScript> {
        let instruction = build_scene_instruction_prompt(theme, age_group);
        Box::pin(async move {
            let request = GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part::text(instruction)],
                }],
                generation_config: Some(GenerationConfig::structured_json(json_schema_for::<
                    ScenePlan,
                >())),
            };
            let response = self.generate_content(&self.planner_model, &request).await?;
            let payload = first_text(&response).ok_or(CollabError::EmptyResponse)?;
            validate_scene_payload(payload)
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::inline("image/png", "QUJD"), Part::text("convert")],
            }],
            generation_config: Some(GenerationConfig::image_only()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "convert");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
        assert!(
            json["generationConfig"]
                .as_object()
                .unwrap()
                .get("responseMimeType")
                .is_none()
        );
    }

    #[test]
    fn planner_config_requests_structured_json() {
        let config = GenerationConfig::structured_json(json_schema_for::<ScenePlan>());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["responseMimeType"], "application/json");
        assert_eq!(json["responseSchema"]["type"], "object");
        assert!(json.as_object().unwrap().get("responseModalities").is_none());
    }

    #[test]
    fn first_image_scans_candidate_parts() {
        let response: RawGenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "here you go"},
                            {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();
        let artifact = first_image(&response).unwrap();
        assert_eq!(artifact.as_str(), "data:image/png;base64,QUJD");
    }

    #[test]
    fn missing_image_yields_none() {
        let response: RawGenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}"#)
                .unwrap();
        assert!(first_image(&response).is_none());

        let empty: RawGenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(first_image(&empty).is_none());
        assert!(first_text(&empty).is_none());
    }

    #[test]
    fn scene_payload_happy_path() {
        let script = validate_scene_payload(
            r#"{"scenes": ["a cat wakes", "a cat walks", "a cat climbs", "a cat naps"]}"#,
        )
        .unwrap();
        assert_eq!(script.scenes()[0], "a cat wakes");
    }

    #[test]
    fn scene_payload_rejects_wrong_count() {
        let err = validate_scene_payload(r#"{"scenes": ["a", "b"]}"#).unwrap_err();
        assert!(matches!(err, CollabError::MalformedPlan(_)));
    }

    #[test]
    fn scene_payload_rejects_wrong_shape() {
        assert!(matches!(
            validate_scene_payload(r#"{"scenes": "not a list"}"#),
            Err(CollabError::MalformedPlan(_))
        ));
        assert!(matches!(
            validate_scene_payload("not json at all"),
            Err(CollabError::MalformedPlan(_))
        ));
        assert!(matches!(
            validate_scene_payload(r#"{"pages": []}"#),
            Err(CollabError::MalformedPlan(_))
        ));
    }
}
