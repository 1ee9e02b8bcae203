//! Convenience re-exports for common `kredka` types.
//!
//! Meant to be glob-imported by the presentation layer:
//!
//! ```ignore
//! use kredka::prelude::*;
//! ```
//!
//! This pulls in the types the vast majority of embedders need: the
//! [`Studio`] with its outcomes and error taxonomy, the option enums, the
//! collaborator traits plus the production [`GeminiClient`], and the
//! booklet/export surface. Specialized pieces (the phrase catalog
//! internals, the raw wire types, the prefs store) are intentionally
//! excluded — import those from their modules directly when needed.

// ── Session ─────────────────────────────────────────────────────────
pub use crate::studio::{Generation, Studio, StorybookResult};
pub use crate::{Artifact, DAILY_LIMIT, json_schema_for};

// ── Options ─────────────────────────────────────────────────────────
pub use crate::options::{
    AgeGroup, Category, EducationalOptions, LineThickness, MathOperation, Mode, ModeKind,
    SessionOptions, Subject,
};

// ── Errors ──────────────────────────────────────────────────────────
pub use crate::error::{GenerationContext, StudioError};

// ── Collaborators ───────────────────────────────────────────────────
pub use crate::api::{
    CollabError, CollabFuture, GeminiClient, ImageGenerator, ScenePlanner, UploadPayload,
};
pub use crate::story::{STORY_SCENE_COUNT, StoryScript};

// ── Export ──────────────────────────────────────────────────────────
pub use crate::booklet::{BookletComposer, BookletRequest, PlacedImage, fit_to_page};
