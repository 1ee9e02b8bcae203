//! Generation engine for a kids' coloring-page studio.
//!
//! `kredka` turns a child's idea — typed text, an uploaded photo, or a story
//! theme — into instructions for the Gemini image model and manages
//! everything around the call: the mode and option state machine,
//! deterministic prompt synthesis, the daily quota gate, the bounded
//! newest-first history, multi-select booklet export, and the all-or-nothing
//! four-page storybook flow. The core abstraction is the
//! [`Studio`](studio::Studio) — one owned session value whose named
//! transition methods are the only way state changes, so a presentation
//! layer stays a thin shell over it.
//!
//! The crate is collaborator-driven: image generation, scene planning, and
//! booklet composition are traits ([`ImageGenerator`](api::ImageGenerator),
//! [`ScenePlanner`](api::ScenePlanner),
//! [`BookletComposer`](booklet::BookletComposer)). A production
//! [`GeminiClient`](api::GeminiClient) implements the first two; the
//! composer is supplied by the embedding application.
//!
//! # Getting started
//!
//! Add `kredka` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kredka = { path = "../kredka" }
//! ```
//!
//! Then drive a session:
//!
//! ```ignore
//! use kredka::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("GEMINI_API_KEY")?;
//!     let gemini = GeminiClient::new(api_key)?;
//!     let composer = PdfComposer::default(); // your BookletComposer
//!
//!     let mut studio = Studio::new(&gemini, &gemini, &composer);
//!     studio.set_user_text("wesoły smok w ogrodzie");
//!
//!     match studio.generate().await? {
//!         Generation::Page(page) => save_data_uri(page.as_str())?,
//!         Generation::Storybook(story) => {
//!             for page in &story.pages {
//!                 save_data_uri(page.as_str())?;
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Where to find things
//!
//! If you're looking for how to...
//!
//! - **Drive a session:** see [`Studio`](studio::Studio) — transitions
//!   (`set_mode`, `set_subject`, option setters, `attach_upload`,
//!   `view_artifact`), the routed [`generate`](studio::Studio::generate)
//!   entry point, and the export methods. Outcomes arrive as
//!   [`Generation`](studio::Generation).
//!
//! - **Implement or inject collaborators:** see the traits in [`api`] and
//!   [`booklet`], and [`GeminiClient`](api::GeminiClient) for the production
//!   HTTP implementation of image rendering and scene planning.
//!
//! - **Understand the instruction text:** see
//!   [`build_generation_prompt`](prompt::build_generation_prompt) and
//!   friends in [`prompt`], with the fixed Polish phrase catalog and
//!   inspiration pools in [`prompt::catalog`].
//!
//! - **Handle failures:** see [`StudioError`](error::StudioError) and its
//!   [`user_message`](error::StudioError::user_message) mapping to the fixed
//!   user-facing copy. Quota and busy rejections are signals to match on,
//!   not messages.
//!
//! - **Lay out a booklet:** see [`BookletRequest`](booklet::BookletRequest)
//!   and the shared page-fit geometry in
//!   [`fit_to_page`](booklet::fit_to_page).
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`studio`] | [`Studio`](studio::Studio) session orchestrator: transitions, generation flows, exports |
//! | [`options`] | Mode tagged union, categories, line thickness, age groups, subjects |
//! | [`prompt`] | Instruction synthesis, phrase catalog, inspiration pools |
//! | [`api`] | Collaborator traits, [`GeminiClient`](api::GeminiClient), upload ingestion |
//! | [`story`] | Four-scene story script with the template fallback |
//! | [`history`] | Bounded newest-first artifact store with eviction reporting |
//! | [`quota`] | Per-session generation allowance |
//! | [`selection`] | Click-ordered booklet selection |
//! | [`booklet`] | Composer trait, booklet request envelope, page-fit geometry |
//! | [`error`] | [`StudioError`](error::StudioError) taxonomy and user-facing copy |
//! | [`storage`] | Persisted onboarding preferences |
//!
//! # Design principles
//!
//! 1. **One owned session value.** Every piece of mutable state lives on the
//!    [`Studio`](studio::Studio) and changes only through named transitions.
//!    No globals, no ambient state.
//!
//! 2. **Collaborators are traits.** The engine never renders, never speaks
//!    HTTP on its own behalf, never writes documents. Anything external is a
//!    dyn-compatible trait the embedder injects.
//!
//! 3. **Commit only on success.** Every flow runs validate → quota → call →
//!    commit → count, and the commit and count steps are unreachable from a
//!    failure. A failed call leaves the session as it was.
//!
//! 4. **Fixed copy, raw errors to logs.** Users see one of a handful of
//!    fixed Polish messages; the underlying collaborator error rides along
//!    as a `source` for `tracing` output only.

pub mod api;
pub mod booklet;
pub mod error;
pub mod history;
pub mod options;
pub mod prelude;
pub mod prompt;
pub mod quota;
pub mod selection;
pub mod storage;
pub mod story;
pub mod studio;

use schemars::JsonSchema;
use std::sync::Arc;

// Re-export schemars so downstream planner implementations can derive
// response schemas against the same version.
pub use schemars;

// ── Constants ──────────────────────────────────────────────────────

/// Base URL of the generative language API, up to the model segment.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for all page rendering, text-to-image and image-to-image.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Text model used for storybook scene planning.
pub const PLANNER_MODEL: &str = "gemini-2.5-flash";

/// Generation actions allowed per session. A four-page storybook counts
/// as one action.
pub const DAILY_LIMIT: u32 = 4;

/// History slots kept after a single-page generation.
pub const HISTORY_CAPACITY: usize = 4;

/// History slots kept right after a storybook batch lands, so the whole
/// story stays visible alongside earlier pages.
pub const STORY_HISTORY_CAPACITY: usize = 8;

// ── Artifact ───────────────────────────────────────────────────────

/// One generated page, carried as a `data:` URI.
///
/// The engine never decodes image bytes: pages flow from the image model
/// through history, selection, and export as opaque URIs. Cloning shares
/// the allocation, and equality compares the URI text, which is what
/// history membership and selection toggling need.
///
/// ```
/// use kredka::Artifact;
///
/// let page = Artifact::png_from_base64("aGVsbG8=");
/// assert!(page.as_str().starts_with("data:image/png;base64,"));
/// assert_eq!(page, page.clone());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact(Arc<str>);

impl Artifact {
    /// Wraps an already-formed data URI.
    pub fn from_data_uri(uri: impl Into<Arc<str>>) -> Self {
        Artifact(uri.into())
    }

    /// Wraps base64 PNG data as the image model returns it.
    pub fn png_from_base64(data: &str) -> Self {
        Artifact(format!("data:image/png;base64,{data}").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Artifact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`. This is the bridge between strong Rust types and
/// the `responseSchema` value the planner's JSON mode expects.
///
/// # Example
///
/// ```
/// use kredka::json_schema_for;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct ScenePayload {
///     scenes: Vec<String>,
/// }
///
/// let schema = json_schema_for::<ScenePayload>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().contains(&"scenes".into()));
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}
