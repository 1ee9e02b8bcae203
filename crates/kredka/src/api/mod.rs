//! Collaborator boundaries for image generation, scene planning, and
//! uploads.
//!
//! The engine never talks to a model directly; it goes through the
//! [`ImageGenerator`] and [`ScenePlanner`] traits so tests can substitute
//! deterministic fakes and so a different backend can be dropped in without
//! touching the orchestration. [`gemini::GeminiClient`] is the production
//! implementation of both.
//!
//! | Item | Role |
//! |------|------|
//! | [`ImageGenerator`] | text → page, and uploaded photo → page |
//! | [`ScenePlanner`] | story theme → validated four-scene script |
//! | [`UploadPayload`] | base64 + MIME pair handed to the restyle call |
//! | [`CollabError`] | what a collaborator reports when it fails |

pub mod gemini;
pub mod upload;

pub use gemini::GeminiClient;
pub use upload::UploadPayload;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::Artifact;
use crate::options::AgeGroup;
use crate::story::StoryScript;

/// Boxed future returned by collaborator trait methods.
///
/// Type alias to keep trait signatures and implementations readable; the
/// boxing is what keeps the traits dyn-compatible.
pub type CollabFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CollabError>> + Send + 'a>>;

/// Failure reported by a collaborator call.
///
/// These never reach the user directly; the orchestrator wraps them with
/// flow context (see [`StudioError`](crate::error::StudioError)) and maps
/// that to a fixed message.
#[derive(Debug, Error)]
pub enum CollabError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("api error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// The reply was not valid JSON for the expected envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered, but the reply held no usable image.
    #[error("response contained no image data")]
    EmptyResponse,

    /// The scene planner's reply could not be turned into a scene script.
    #[error("unusable scene plan: {0}")]
    MalformedPlan(String),

    /// The document composer could not produce a file.
    #[error("composition failed: {0}")]
    Composition(String),
}

/// Produces coloring pages from instruction text, or by restyling an
/// uploaded photo.
///
/// Implementations clone whatever they need from the borrowed arguments
/// into the returned future, so the future only borrows `self`.
pub trait ImageGenerator: Send + Sync {
    /// Renders one page from a full instruction string.
    fn generate(&self, instruction: &str) -> CollabFuture<'_, Artifact>;

    /// Turns an uploaded photo into a page, steered by the instruction.
    fn restyle(&self, upload: &UploadPayload, instruction: &str) -> CollabFuture<'_, Artifact>;
}

/// Plans a four-scene storybook from a single theme.
pub trait ScenePlanner: Send + Sync {
    /// Returns a validated scene script for the theme, pitched at the given
    /// age group. Implementations should fail with
    /// [`CollabError::MalformedPlan`] when the reply parses but cannot form
    /// a valid script; the orchestrator treats any planner error as a
    /// recoverable degradation, not a failed generation.
    fn plan_scenes(&self, theme: &str, age_group: AgeGroup) -> CollabFuture<'_, StoryScript>;
}
