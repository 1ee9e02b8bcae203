//! Session options: the structured knobs a user sets before generating.
//!
//! The mode is a tagged union — [`Mode::Classic`] carries the category,
//! [`Mode::Educational`] carries the curriculum payload, [`Mode::Storybook`]
//! carries nothing — so combinations like "a curriculum subject in classic
//! mode" cannot be represented at all. Line thickness and age group are
//! meaningful in every mode and live alongside the mode on
//! [`SessionOptions`].
//!
//! Display labels are Polish (the app's UI language); the phrases sent to
//! the image model are English and live in [`crate::prompt::catalog`].

// ── Category ───────────────────────────────────────────────────────

/// Picture category for classic-mode generations.
///
/// Selects the art-style phrase in the synthesized instruction. `All` is
/// the neutral style and the default after every mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Animals,
    Vehicles,
    Fantasy,
    Nature,
    Food,
    Sport,
    Space,
    Professions,
}

impl Category {
    /// Every category, in UI display order.
    pub const VARIANTS: [Category; 9] = [
        Category::All,
        Category::Animals,
        Category::Vehicles,
        Category::Fantasy,
        Category::Nature,
        Category::Food,
        Category::Sport,
        Category::Space,
        Category::Professions,
    ];

    /// Polish display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Wszystko",
            Category::Animals => "Zwierzęta",
            Category::Vehicles => "Pojazdy",
            Category::Fantasy => "Fantazja",
            Category::Nature => "Natura",
            Category::Food => "Jedzenie",
            Category::Sport => "Sport",
            Category::Space => "Kosmos",
            Category::Professions => "Zawody",
        }
    }
}

// ── Line thickness ─────────────────────────────────────────────────

/// Outline weight of the generated line art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineThickness {
    /// Grube — thick, bold outlines. Easier for small hands to color inside.
    #[default]
    Thick,
    /// Cienkie — thin, precise outlines.
    Thin,
}

impl LineThickness {
    pub const VARIANTS: [LineThickness; 2] = [LineThickness::Thick, LineThickness::Thin];

    /// Polish display label.
    pub fn label(&self) -> &'static str {
        match self {
            LineThickness::Thick => "Grube",
            LineThickness::Thin => "Cienkie",
        }
    }
}

// ── Age group ──────────────────────────────────────────────────────

/// Target age band; drives scene complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeGroup {
    /// 2-4 lata: a single extremely simple object, large empty regions.
    Ages2To4,
    /// 5-7 lat: a simple scene, clear outlines, moderate detail.
    #[default]
    Ages5To7,
    /// 8+ lat: a detailed scene, finer elements, richer background.
    Ages8Plus,
}

impl AgeGroup {
    pub const VARIANTS: [AgeGroup; 3] =
        [AgeGroup::Ages2To4, AgeGroup::Ages5To7, AgeGroup::Ages8Plus];

    /// Polish display label.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Ages2To4 => "2-4 lata",
            AgeGroup::Ages5To7 => "5-7 lat",
            AgeGroup::Ages8Plus => "8+ lat",
        }
    }
}

// ── Educational payload ────────────────────────────────────────────

/// Curriculum subject for educational mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subject {
    /// Angielski — vocabulary pages with a bilingual caption.
    #[default]
    English,
    /// Matematyka — arithmetic problems overlaid on the drawing.
    Math,
    /// J. Polski — Polish culture, legends, alphabet.
    Polish,
    /// Przyroda — nature and biology accuracy.
    Nature,
    /// Muzyka — instruments and notation.
    Music,
    /// Plastyka — patterns and creative coloring.
    Art,
    /// Fizyka — physical phenomena, simplified.
    Physics,
}

impl Subject {
    pub const VARIANTS: [Subject; 7] = [
        Subject::English,
        Subject::Math,
        Subject::Polish,
        Subject::Nature,
        Subject::Music,
        Subject::Art,
        Subject::Physics,
    ];

    /// Polish display label.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::English => "Angielski",
            Subject::Math => "Matematyka",
            Subject::Polish => "J. Polski",
            Subject::Nature => "Przyroda",
            Subject::Music => "Muzyka",
            Subject::Art => "Plastyka",
            Subject::Physics => "Fizyka",
        }
    }
}

/// Arithmetic flavor for the math subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MathOperation {
    #[default]
    AddSubTo10,
    AddSubTo20,
    Multiplication,
    Shapes,
}

impl MathOperation {
    pub const VARIANTS: [MathOperation; 4] = [
        MathOperation::AddSubTo10,
        MathOperation::AddSubTo20,
        MathOperation::Multiplication,
        MathOperation::Shapes,
    ];

    /// Polish display label.
    pub fn label(&self) -> &'static str {
        match self {
            MathOperation::AddSubTo10 => "Dodawanie do 10",
            MathOperation::AddSubTo20 => "Dodawanie do 20",
            MathOperation::Multiplication => "Mnożenie",
            MathOperation::Shapes => "Figury",
        }
    }
}

/// The settings that only exist while in educational mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EducationalOptions {
    pub subject: Subject,
    pub math_operation: MathOperation,
    /// Free-text vocabulary for the English subject, e.g. `"Dom / House"`.
    /// When non-empty it overrides the user's prompt text entirely.
    pub custom_vocabulary: String,
}

impl EducationalOptions {
    /// True when the vocabulary override is in effect: English subject with
    /// non-empty (post-trim) custom vocabulary.
    pub fn vocabulary_override(&self) -> Option<&str> {
        if self.subject == Subject::English {
            let vocab = self.custom_vocabulary.trim();
            if !vocab.is_empty() {
                return Some(vocab);
            }
        }
        None
    }
}

// ── Mode ───────────────────────────────────────────────────────────

/// Which of the three generation experiences is active.
///
/// Each variant carries exactly the state that is meaningful in that mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Free-form single pages with a category-driven art style.
    Classic { category: Category },
    /// Curriculum pages: subject instruction replaces the no-text rule.
    Educational(EducationalOptions),
    /// Four-scene story: the theme goes to the scene planner first.
    Storybook,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Classic {
            category: Category::default(),
        }
    }
}

impl Mode {
    /// The discriminant without payload, for transition requests.
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Classic { .. } => ModeKind::Classic,
            Mode::Educational(_) => ModeKind::Educational,
            Mode::Storybook => ModeKind::Storybook,
        }
    }

    /// The educational payload, when in educational mode.
    pub fn educational(&self) -> Option<&EducationalOptions> {
        match self {
            Mode::Educational(edu) => Some(edu),
            _ => None,
        }
    }
}

/// Payload-free mode discriminant used to request a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Classic,
    Educational,
    Storybook,
}

// ── SessionOptions ─────────────────────────────────────────────────

/// The full option state for one session.
///
/// A single mutable instance is owned by [`crate::studio::Studio`]; every
/// mutation goes through its named transition methods, which also apply the
/// reset-on-transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub mode: Mode,
    pub line_thickness: LineThickness,
    pub age_group: AgeGroup,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mode, keeping the shared options.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_line_thickness(mut self, thickness: LineThickness) -> Self {
        self.line_thickness = thickness;
        self
    }

    pub fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = age_group;
        self
    }

    /// Convenience constructor for educational mode with a subject.
    pub fn educational(subject: Subject) -> Self {
        Self {
            mode: Mode::Educational(EducationalOptions {
                subject,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Reset the per-attempt option state to fixed defaults: line thickness,
    /// age group, the classic category, and the custom vocabulary. The mode
    /// itself, the subject, and the math operation are preserved.
    pub fn reset_transient(&mut self) {
        self.line_thickness = LineThickness::default();
        self.age_group = AgeGroup::default();
        match &mut self.mode {
            Mode::Classic { category } => *category = Category::default(),
            Mode::Educational(edu) => edu.custom_vocabulary.clear(),
            Mode::Storybook => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let opts = SessionOptions::default();
        assert_eq!(
            opts.mode,
            Mode::Classic {
                category: Category::All
            }
        );
        assert_eq!(opts.line_thickness, LineThickness::Thick);
        assert_eq!(opts.age_group, AgeGroup::Ages5To7);
    }

    #[test]
    fn reset_transient_keeps_mode_and_subject() {
        let mut opts = SessionOptions::educational(Subject::Math)
            .with_line_thickness(LineThickness::Thin)
            .with_age_group(AgeGroup::Ages8Plus);
        if let Mode::Educational(edu) = &mut opts.mode {
            edu.custom_vocabulary = "Dom / House".into();
            edu.math_operation = MathOperation::Shapes;
        }

        opts.reset_transient();

        assert_eq!(opts.line_thickness, LineThickness::Thick);
        assert_eq!(opts.age_group, AgeGroup::Ages5To7);
        let edu = opts.mode.educational().unwrap();
        assert_eq!(edu.subject, Subject::Math);
        assert_eq!(edu.math_operation, MathOperation::Shapes);
        assert!(edu.custom_vocabulary.is_empty());
    }

    #[test]
    fn reset_transient_resets_classic_category() {
        let mut opts = SessionOptions::default().with_mode(Mode::Classic {
            category: Category::Space,
        });
        opts.reset_transient();
        assert_eq!(
            opts.mode,
            Mode::Classic {
                category: Category::All
            }
        );
    }

    #[test]
    fn vocabulary_override_requires_english_and_content() {
        let edu = EducationalOptions {
            subject: Subject::English,
            custom_vocabulary: "  Kot / Cat  ".into(),
            ..Default::default()
        };
        assert_eq!(edu.vocabulary_override(), Some("Kot / Cat"));

        let blank = EducationalOptions {
            subject: Subject::English,
            custom_vocabulary: "   ".into(),
            ..Default::default()
        };
        assert_eq!(blank.vocabulary_override(), None);

        let math = EducationalOptions {
            subject: Subject::Math,
            custom_vocabulary: "Dom / House".into(),
            ..Default::default()
        };
        assert_eq!(math.vocabulary_override(), None);
    }
}
