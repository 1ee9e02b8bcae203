//! Error taxonomy for the generation engine.
//!
//! Two layers: [`CollabError`](crate::api::CollabError) is what a
//! collaborator boundary reports (transport, API status, unusable reply);
//! [`StudioError`] is what the orchestrator surfaces. Raw collaborator
//! errors never cross the orchestrator boundary — they are wrapped with the
//! flow context and mapped to one fixed Polish message per context by
//! [`StudioError::user_message`].
//!
//! Validation (`EmptyPrompt`, `MissingUpload`) and the quota gate fire
//! pre-flight, before any collaborator is invoked. `QuotaExceeded` and
//! `Busy` are signals the caller matches on (a blocking modal, a disabled
//! button) rather than messages, so they carry no user-facing text.

use crate::api::CollabError;
use std::fmt;
use thiserror::Error;

/// Which user-visible flow a generation failure happened in.
///
/// Selects one of the three fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationContext {
    /// Text-to-image, classic or educational.
    Text,
    /// Image-to-image from an uploaded photo.
    Upload,
    /// The four-scene storybook batch.
    Storybook,
}

impl fmt::Display for GenerationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationContext::Text => write!(f, "text"),
            GenerationContext::Upload => write!(f, "upload"),
            GenerationContext::Storybook => write!(f, "storybook"),
        }
    }
}

/// Everything a [`Studio`](crate::studio::Studio) operation can fail with.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Empty effective subject text and no vocabulary override.
    #[error("empty subject text")]
    EmptyPrompt,

    /// The upload flow was invoked with no pending upload.
    #[error("no pending upload")]
    MissingUpload,

    /// The per-session generation allowance is used up.
    #[error("daily limit reached ({used}/{limit})")]
    QuotaExceeded { used: u32, limit: u32 },

    /// Another generation is still in flight; the request was rejected at
    /// the entry point, not queued.
    #[error("a generation is already in flight")]
    Busy,

    /// A collaborator call failed or returned nothing usable. No artifacts
    /// were committed and the quota was not consumed.
    #[error("{context} generation failed: {source}")]
    Generation {
        context: GenerationContext,
        #[source]
        source: CollabError,
    },

    /// The booklet composer failed. The selection is left untouched so the
    /// user can retry without re-selecting.
    #[error("booklet composition failed: {source}")]
    Booklet {
        #[source]
        source: CollabError,
    },
}

impl StudioError {
    /// Wrap a collaborator failure with its flow context.
    pub(crate) fn generation(context: GenerationContext, source: CollabError) -> Self {
        StudioError::Generation { context, source }
    }

    /// The fixed Polish message shown in the UI's error banner, if this
    /// error carries one. Quota/busy signals and the silent missing-upload
    /// case return `None`.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            StudioError::EmptyPrompt => {
                Some("Puste pole czeka na Twój pomysł! Wpisz, co mam narysować. ✨")
            }
            StudioError::Generation {
                context: GenerationContext::Text,
                ..
            } => Some(
                "Ojej! Coś poszło nie tak podczas rysowania. Sprawdź połączenie lub spróbuj \
                 zmienić opis.",
            ),
            StudioError::Generation {
                context: GenerationContext::Upload,
                ..
            } => Some(
                "Nie udało się zamienić tego zdjęcia w kolorowankę. Upewnij się, że zdjęcie \
                 jest wyraźne i spróbuj ponownie.",
            ),
            StudioError::Generation {
                context: GenerationContext::Storybook,
                ..
            } => Some("Nie udało się stworzyć historyjki. Spróbuj ponownie za chwilę."),
            StudioError::Booklet { .. } => Some("Nie udało się wygenerować książeczki."),
            StudioError::MissingUpload | StudioError::QuotaExceeded { .. } | StudioError::Busy => {
                None
            }
        }
    }
}
