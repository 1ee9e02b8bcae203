//! Storybook scene plans.
//!
//! A storybook generation turns one theme into exactly four scene
//! descriptions (introduction, rising action, climax, resolution), each of
//! which is then rendered as its own coloring page. [`ScenePlan`] is the
//! wire shape the planning model must return; [`StoryScript`] is the
//! validated form the rest of the engine works with. A plan that cannot be
//! validated is replaced by [`StoryScript::fallback`], so a flaky planner
//! degrades the story rather than failing the generation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of scenes in every storybook.
pub const STORY_SCENE_COUNT: usize = 4;

/// Response shape requested from the scene-planning model.
///
/// The planner is asked for structured JSON matching this schema (via
/// [`json_schema_for`](crate::json_schema_for)), but the schema alone does
/// not enforce the scene count, so the payload still goes through
/// [`StoryScript::from_scenes`] before anything is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScenePlan {
    /// Scene descriptions in narrative order.
    pub scenes: Vec<String>,
}

/// A validated four-scene narrative, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryScript {
    scenes: [String; STORY_SCENE_COUNT],
}

impl StoryScript {
    /// Validates a raw scene list: exactly [`STORY_SCENE_COUNT`] entries,
    /// none blank. Scenes are stored trimmed.
    pub fn from_scenes(scenes: Vec<String>) -> Option<Self> {
        if scenes.len() != STORY_SCENE_COUNT {
            return None;
        }
        let mut trimmed = Vec::with_capacity(STORY_SCENE_COUNT);
        for scene in scenes {
            let scene = scene.trim().to_owned();
            if scene.is_empty() {
                return None;
            }
            trimmed.push(scene);
        }
        let scenes: [String; STORY_SCENE_COUNT] = trimmed.try_into().ok()?;
        Some(Self { scenes })
    }

    /// Templated four-beat story used when the planner's output is
    /// unusable. The theme is embedded verbatim so the pages still follow
    /// the user's idea.
    pub fn fallback(theme: &str) -> Self {
        let theme = theme.trim();
        Self {
            scenes: [
                format!(
                    "{theme} appears for the first time, waving hello in a \
                     cheerful everyday setting"
                ),
                format!(
                    "{theme} sets off on an adventure and discovers something \
                     surprising along the way"
                ),
                format!("{theme} faces the biggest challenge of the whole journey"),
                format!("{theme} celebrates a happy ending together with new friends"),
            ],
        }
    }

    /// Scenes in narrative order.
    pub fn scenes(&self) -> &[String; STORY_SCENE_COUNT] {
        &self.scenes
    }
}

// ── Tests ──────────────────────────────────────────────────────────
