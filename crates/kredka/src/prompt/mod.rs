//! Deterministic prompt synthesis: (user text, options) → the exact
//! instruction sent to the image collaborator.
//!
//! Three entry points:
//!
//! | Function | Used by |
//! |----------|---------|
//! | [`build_generation_prompt`] | text-to-image, classic/educational/storybook pages |
//! | [`build_restyle_prompt`] | image-to-image from an uploaded photo |
//! | [`build_scene_instruction_prompt`] | the scene-planning collaborator |
//!
//! All three are pure: no network, no clock, no randomness. Identical
//! inputs produce byte-identical instructions. The phrases come from
//! [`catalog`]; assembly goes through [`InstructionBuilder`].

pub mod builder;
pub mod catalog;

pub use builder::InstructionBuilder;

use crate::error::StudioError;
use crate::options::{AgeGroup, Category, Mode, SessionOptions};

/// Build the full text-to-image instruction.
///
/// Applies the vocabulary-override rule first: in educational mode with the
/// English subject and a non-empty custom vocabulary, the vocabulary
/// replaces the user text entirely. Fails with
/// [`StudioError::EmptyPrompt`] when the effective subject text ends up
/// empty — the only validation this engine performs on free text.
///
/// Section order is fixed: task framing, subject/complexity, art style,
/// line style, special instructions, hard constraints.
pub fn build_generation_prompt(
    user_text: &str,
    options: &SessionOptions,
) -> Result<String, StudioError> {
    let trimmed = user_text.trim();
    let effective = match &options.mode {
        Mode::Educational(edu) => edu.vocabulary_override().unwrap_or(trimmed),
        _ => trimmed,
    };
    if effective.is_empty() {
        return Err(StudioError::EmptyPrompt);
    }

    // Category styling exists only in classic mode; everything else gets
    // the neutral style.
    let style = match &options.mode {
        Mode::Classic { category } => catalog::style_phrase(*category),
        _ => catalog::style_phrase(Category::All),
    };

    let special = match &options.mode {
        Mode::Educational(edu) => catalog::subject_instruction(edu),
        _ => catalog::NO_TEXT_INSTRUCTION.to_string(),
    };

    Ok(
        InstructionBuilder::new("Task", "Generate a coloring book page for children.")
            .section(
                "Subject",
                catalog::complexity_phrase(options.age_group, effective),
            )
            .section("Art Style", style)
            .section("Line Style", catalog::line_phrase(options.line_thickness))
            .section("Special Instructions", special)
            .section("Constraints", catalog::HARD_CONSTRAINTS)
            .build(),
    )
}

/// Build the image-to-image instruction.
///
/// The subject is the uploaded image, so there is no free text and no
/// category styling — only the age/line tuning and, in educational mode,
/// the subject instruction. Infallible: nothing to validate.
pub fn build_restyle_prompt(options: &SessionOptions) -> String {
    let special = match &options.mode {
        Mode::Educational(edu) => catalog::subject_instruction(edu),
        _ => catalog::RESTYLE_NO_TEXT_INSTRUCTION.to_string(),
    };

    InstructionBuilder::new("Task", "Convert this image into a coloring book page.")
        .section(
            "Style",
            format!("{}.", catalog::restyle_detail_phrase(options.age_group)),
        )
        .section(
            "Lines",
            format!("{}.", catalog::restyle_line_phrase(options.line_thickness)),
        )
        .section("Instructions", special)
        .section("Constraints", catalog::RESTYLE_CONSTRAINTS)
        .build()
}

/// Build the instruction for the scene-planning collaborator: exactly four
/// scenes forming introduction, rising action, climax, resolution, returned
/// as JSON so the reply can be schema-checked.
pub fn build_scene_instruction_prompt(theme: &str, age_group: AgeGroup) -> String {
    let theme = theme.trim();
    let age = catalog::age_span(age_group);
    format!(
        "You are planning a four-page coloring storybook for children aged {age}. The story \
         theme is: {theme}. Write exactly 4 scene descriptions forming a complete story arc: \
         introduction, rising action, climax, resolution. Each scene must be one sentence \
         describing a single drawable moment with the main character clearly visible, simple \
         enough for a children's coloring page. Respond with JSON of the form \
         {{\"scenes\": [\"scene 1\", \"scene 2\", \"scene 3\", \"scene 4\"]}}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{EducationalOptions, LineThickness, MathOperation, Subject};

    #[test]
    fn classic_prompt_assembles_all_sections_in_order() {
        let options = SessionOptions::default().with_mode(Mode::Classic {
            category: Category::Animals,
        });
        let prompt = build_generation_prompt("lis detektyw z lupą", &options).unwrap();

        let expected = "Task: Generate a coloring book page for children.\n\
             Subject: A simple scene featuring: lis detektyw z lupą. Clear outlines, moderate detail.\n\
             Art Style: Style: cute, cartoon animal illustration. Characters should have big eyes and friendly expressions. The scene should be fun and lively.\n\
             Line Style: Thick, bold outlines.\n\
             Special Instructions: Do not add any text, words, captions, or labels to the image unless explicitly requested in the subject description.\n\
             Constraints: Black and white line art only. Pure white background. No gray scaling, no shading, no colors. High contrast. Do not include the prompt text as a title.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn prompt_is_deterministic() {
        let options = SessionOptions::default();
        let a = build_generation_prompt("smok jedzący pizzę", &options).unwrap();
        let b = build_generation_prompt("smok jedzący pizzę", &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_is_rejected() {
        let options = SessionOptions::default();
        assert!(matches!(
            build_generation_prompt("   ", &options),
            Err(StudioError::EmptyPrompt)
        ));
    }

    #[test]
    fn vocabulary_override_replaces_empty_user_text() {
        let mut options = SessionOptions::educational(Subject::English);
        if let Mode::Educational(edu) = &mut options.mode {
            edu.custom_vocabulary = "Dom / House".into();
        }

        let prompt = build_generation_prompt("", &options).unwrap();
        assert!(prompt.contains("Dom / House"));
        assert!(prompt.contains("MUST BE 'Dom / House'"));
    }

    #[test]
    fn vocabulary_override_beats_user_text() {
        let mut options = SessionOptions::educational(Subject::English);
        if let Mode::Educational(edu) = &mut options.mode {
            edu.custom_vocabulary = "Kot / Cat".into();
        }

        let prompt = build_generation_prompt("zamek na chmurze", &options).unwrap();
        assert!(prompt.contains("Kot / Cat"));
        assert!(!prompt.contains("zamek na chmurze"));
    }

    #[test]
    fn educational_mode_uses_neutral_style_and_subject_instruction() {
        let options = SessionOptions::educational(Subject::Music);
        let prompt = build_generation_prompt("orkiestra zwierząt", &options).unwrap();

        assert!(prompt.contains(catalog::style_phrase(Category::All)));
        assert!(prompt.contains("musical instruments"));
        assert!(!prompt.contains(catalog::NO_TEXT_INSTRUCTION));
    }

    #[test]
    fn storybook_pages_keep_the_no_text_rule() {
        let options = SessionOptions::default().with_mode(Mode::Storybook);
        let prompt = build_generation_prompt("a brave little fox", &options).unwrap();

        assert!(prompt.contains(catalog::style_phrase(Category::All)));
        assert!(prompt.contains(catalog::NO_TEXT_INSTRUCTION));
    }

    #[test]
    fn restyle_prompt_skips_free_text_but_keeps_tuning() {
        let options = SessionOptions::default()
            .with_line_thickness(LineThickness::Thin)
            .with_age_group(AgeGroup::Ages2To4);
        let prompt = build_restyle_prompt(&options);

        let expected = "Task: Convert this image into a coloring book page.\n\
             Style: Simple shapes, low detail.\n\
             Lines: Thin precise lines.\n\
             Instructions: Do not add any text.\n\
             Constraints: Black and white line art only. Remove all original colors and shading. Pure white background.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn restyle_prompt_carries_the_subject_instruction() {
        let mut options = SessionOptions::educational(Subject::Math);
        if let Mode::Educational(edu) = &mut options.mode {
            edu.math_operation = MathOperation::AddSubTo20;
        }
        let prompt = build_restyle_prompt(&options);
        assert!(prompt.contains("addition and subtraction up to 20"));
    }

    #[test]
    fn scene_instruction_names_the_arc_and_theme() {
        let prompt = build_scene_instruction_prompt("  mały smok  ", AgeGroup::Ages5To7);
        assert!(prompt.contains("mały smok"));
        assert!(prompt.contains("introduction, rising action, climax, resolution"));
        assert!(prompt.contains("\"scenes\""));
        assert!(prompt.contains("aged 5-7"));
    }

    #[test]
    fn educational_ignores_vocabulary_outside_english() {
        let mut options = SessionOptions::educational(Subject::Physics);
        if let Mode::Educational(edu) = &mut options.mode {
            edu.custom_vocabulary = "Dom / House".into();
        }
        let prompt = build_generation_prompt("rakieta", &options).unwrap();
        assert!(prompt.contains("rakieta"));
        assert!(!prompt.contains("Dom / House"));
    }
}
