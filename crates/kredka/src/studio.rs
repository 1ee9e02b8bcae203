//! The studio: one child's session, owned state, and every flow that
//! mutates it.
//!
//! [`Studio`] holds the options, the generation history, the quota guard,
//! the booklet selection, and the canvas (active page or story strip). All
//! mutation goes through named transitions; the UI layer stays a thin shell
//! that renders state and forwards taps.
//!
//! Generation follows one fixed sequence: validate, check the quota, call
//! the collaborators, commit, count. Commit and count are only reachable
//! from the success branch, so a failed call leaves the session exactly as
//! it was apart from the error banner.
//!
//! | Flow | Collaborator calls | Commits |
//! |------|--------------------|---------|
//! | text | one image render | one page |
//! | upload | one restyle | one page, upload consumed |
//! | storybook | one plan, four renders | four pages or none |

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::Artifact;
use crate::api::{CollabError, ImageGenerator, ScenePlanner, UploadPayload};
use crate::booklet::{
    BookletComposer, BookletRequest, DEFAULT_BOOKLET_TITLE, DEFAULT_STORY_TITLE,
};
use crate::error::{GenerationContext, StudioError};
use crate::history::HistoryStore;
use crate::options::{
    AgeGroup, Category, EducationalOptions, LineThickness, MathOperation, Mode, ModeKind,
    SessionOptions, Subject,
};
use crate::prompt::catalog::{
    CLASSIC_STARTERS, Starter, category_inspirations, subject_inspirations, subject_starters,
};
use crate::prompt::{build_generation_prompt, build_restyle_prompt};
use crate::quota::QuotaGuard;
use crate::selection::Selection;
use crate::story::{STORY_SCENE_COUNT, StoryScript};

// ── Outcomes ───────────────────────────────────────────────────────

/// Pages produced by one storybook run, in reading order.
#[derive(Debug, Clone)]
pub struct StorybookResult {
    pub pages: [Artifact; STORY_SCENE_COUNT],
    /// True when the planner's reply was unusable and the templated
    /// fallback scenes were rendered instead.
    pub degraded: bool,
}

/// What one successful [`Studio::generate`] call produced.
#[derive(Debug, Clone)]
pub enum Generation {
    /// A single page, now on the canvas.
    Page(Artifact),
    /// A full story strip.
    Storybook(StorybookResult),
}

// ── Studio ─────────────────────────────────────────────────────────

/// The session orchestrator.
///
/// Collaborators are borrowed, not owned: the image generator, the scene
/// planner, and the booklet composer outlive the studio and can be shared
/// between sessions.
///
/// # Lifetimes
///
/// `'a` is the borrow of the three collaborators. Bind them before
/// constructing the studio so they outlive it.
pub struct Studio<'a> {
    images: &'a dyn ImageGenerator,
    planner: &'a dyn ScenePlanner,
    composer: &'a dyn BookletComposer,

    options: SessionOptions,
    history: HistoryStore,
    quota: QuotaGuard,
    selection: Selection,

    user_text: String,
    active: Option<Artifact>,
    story_pages: Vec<Artifact>,
    pending_upload: Option<UploadPayload>,
    /// Last educational payload, restored when the mode is re-entered.
    parked_education: EducationalOptions,
    last_error: Option<&'static str>,
    in_flight: bool,
}

impl<'a> Studio<'a> {
    pub fn new(
        images: &'a dyn ImageGenerator,
        planner: &'a dyn ScenePlanner,
        composer: &'a dyn BookletComposer,
    ) -> Self {
        Self {
            images,
            planner,
            composer,
            options: SessionOptions::new(),
            history: HistoryStore::new(),
            quota: QuotaGuard::new(),
            selection: Selection::new(),
            user_text: String::new(),
            active: None,
            story_pages: Vec::new(),
            pending_upload: None,
            parked_education: EducationalOptions::default(),
            last_error: None,
            in_flight: false,
        }
    }

    /// Replace the quota guard, e.g. for a custom allowance.
    pub fn with_quota(mut self, quota: QuotaGuard) -> Self {
        self.quota = quota;
        self
    }

    /// Start from pre-seeded options instead of the defaults.
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        if let Mode::Educational(edu) = &options.mode {
            self.parked_education = edu.clone();
        }
        self.options = options;
        self
    }

    // ── Read access ────────────────────────────────────────────────

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn quota(&self) -> &QuotaGuard {
        &self.quota
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    /// The page on the canvas, if any.
    pub fn active_page(&self) -> Option<&Artifact> {
        self.active.as_ref()
    }

    /// The story strip from the last storybook run. Empty outside it.
    pub fn story_pages(&self) -> &[Artifact] {
        &self.story_pages
    }

    pub fn pending_upload(&self) -> Option<&UploadPayload> {
        self.pending_upload.as_ref()
    }

    /// The fixed message for the error banner, if the last action failed
    /// with one.
    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    /// True while a generation or export holds the single in-flight slot.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    // ── Options and canvas transitions ─────────────────────────────

    pub fn set_user_text(&mut self, text: impl Into<String>) {
        self.user_text = text.into();
    }

    /// Reset the canvas and the per-attempt options. Mode, subject,
    /// history, and the quota are untouched.
    pub fn clear(&mut self) {
        self.reset_transient();
    }

    /// Switch the experience. Any mode change resets the canvas first; the
    /// educational payload is parked on the way out and restored on the
    /// way back in, with the vocabulary blanked.
    pub fn set_mode(&mut self, kind: ModeKind) {
        self.park_education();
        self.reset_transient();
        self.options.mode = match kind {
            ModeKind::Classic => Mode::Classic {
                category: Category::default(),
            },
            ModeKind::Educational => Mode::Educational(self.parked_education.clone()),
            ModeKind::Storybook => Mode::Storybook,
        };
    }

    /// Pick the curriculum subject. Inside educational mode this resets
    /// the canvas like a mode change; outside it only updates the parked
    /// payload for the next switch.
    pub fn set_subject(&mut self, subject: Subject) {
        self.parked_education.subject = subject;
        if self.options.mode.kind() == ModeKind::Educational {
            self.reset_transient();
            if let Mode::Educational(edu) = &mut self.options.mode {
                edu.subject = subject;
            }
        }
    }

    /// No-op outside classic mode.
    pub fn set_category(&mut self, category: Category) {
        if let Mode::Classic { category: current } = &mut self.options.mode {
            *current = category;
        }
    }

    pub fn set_line_thickness(&mut self, thickness: LineThickness) {
        self.options.line_thickness = thickness;
    }

    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.options.age_group = age_group;
    }

    pub fn set_math_operation(&mut self, operation: MathOperation) {
        self.parked_education.math_operation = operation;
        if let Mode::Educational(edu) = &mut self.options.mode {
            edu.math_operation = operation;
        }
    }

    /// No-op outside educational mode.
    pub fn set_custom_vocabulary(&mut self, vocabulary: impl Into<String>) {
        if let Mode::Educational(edu) = &mut self.options.mode {
            edu.custom_vocabulary = vocabulary.into();
        }
    }

    /// Stage an uploaded photo. Its preview takes the canvas, the text and
    /// any story strip are dropped, and the next generate call runs the
    /// restyle flow.
    pub fn attach_upload(&mut self, payload: UploadPayload) {
        self.active = Some(payload.preview_artifact());
        self.pending_upload = Some(payload);
        self.user_text.clear();
        self.story_pages.clear();
        self.last_error = None;
    }

    /// Discard a staged upload together with its preview.
    pub fn clear_upload(&mut self) {
        if self.pending_upload.take().is_some() {
            self.active = None;
        }
    }

    /// Adopt an inspiration string as the user text. A staged upload and
    /// any vocabulary override are dropped so the adopted text is what
    /// actually renders.
    pub fn adopt_suggestion(&mut self, suggestion: &str) {
        self.clear_upload();
        self.user_text = suggestion.to_string();
        if let Mode::Educational(edu) = &mut self.options.mode {
            edu.custom_vocabulary.clear();
        }
    }

    /// A tap on a history thumbnail. In selection mode it toggles the
    /// booklet pick; otherwise the page takes the canvas, replacing any
    /// staged upload or story strip.
    pub fn view_artifact(&mut self, artifact: &Artifact) {
        if self.selection.is_active() {
            self.selection.toggle(artifact);
        } else {
            self.clear_upload();
            self.active = Some(artifact.clone());
            self.story_pages.clear();
        }
    }

    pub fn toggle_selection_mode(&mut self) {
        self.selection.toggle_mode();
    }

    /// Inspiration pool for the current mode: per subject in educational
    /// mode, per category otherwise. Storybook draws from the full classic
    /// pool.
    pub fn suggestions(&self) -> Vec<&'static str> {
        match &self.options.mode {
            Mode::Classic { category } => category_inspirations(*category),
            Mode::Educational(edu) => subject_inspirations(edu.subject).to_vec(),
            Mode::Storybook => category_inspirations(Category::All),
        }
    }

    /// One-click starters for the empty canvas.
    pub fn starters(&self) -> &'static [Starter] {
        match &self.options.mode {
            Mode::Educational(edu) => subject_starters(edu.subject),
            _ => CLASSIC_STARTERS,
        }
    }

    fn park_education(&mut self) {
        if let Mode::Educational(edu) = &self.options.mode {
            self.parked_education = EducationalOptions {
                subject: edu.subject,
                math_operation: edu.math_operation,
                custom_vocabulary: String::new(),
            };
        }
    }

    fn reset_transient(&mut self) {
        self.user_text.clear();
        self.active = None;
        self.story_pages.clear();
        self.pending_upload = None;
        self.last_error = None;
        self.selection.exit();
        self.options.reset_transient();
    }

    // ── Generation ─────────────────────────────────────────────────

    /// Run one generation for the current state: the restyle flow when an
    /// upload is staged, the storybook flow in storybook mode, the text
    /// flow otherwise.
    ///
    /// Rejected with [`StudioError::Busy`] while another call holds the
    /// in-flight slot; the request is not queued.
    pub async fn generate(&mut self) -> Result<Generation, StudioError> {
        self.begin_flight()?;
        let result = if self.pending_upload.is_some() {
            self.upload_flow().await.map(Generation::Page)
        } else if self.options.mode.kind() == ModeKind::Storybook {
            self.storybook_flow().await.map(Generation::Storybook)
        } else {
            self.text_flow().await.map(Generation::Page)
        };
        self.in_flight = false;
        match &result {
            Ok(_) => self.last_error = None,
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.last_error = Some(message);
                }
            }
        }
        result
    }

    fn begin_flight(&mut self) -> Result<(), StudioError> {
        if self.in_flight {
            return Err(StudioError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    async fn text_flow(&mut self) -> Result<Artifact, StudioError> {
        let instruction = build_generation_prompt(&self.user_text, &self.options)?;
        self.quota.check()?;

        debug!(
            "text generation: mode={:?}, {} instruction chars",
            self.options.mode.kind(),
            instruction.len()
        );
        let artifact = self
            .images
            .generate(&instruction)
            .await
            .map_err(|e| StudioError::generation(GenerationContext::Text, e))?;

        self.commit_single(artifact.clone());
        Ok(artifact)
    }

    async fn upload_flow(&mut self) -> Result<Artifact, StudioError> {
        let Some(upload) = self.pending_upload.clone() else {
            return Err(StudioError::MissingUpload);
        };
        let instruction = build_restyle_prompt(&self.options);
        self.quota.check()?;

        debug!("upload restyle: mime={}", upload.mime_type());
        let artifact = self
            .images
            .restyle(&upload, &instruction)
            .await
            .map_err(|e| StudioError::generation(GenerationContext::Upload, e))?;

        // The photo is consumed only once it has actually become a page.
        self.pending_upload = None;
        self.commit_single(artifact.clone());
        Ok(artifact)
    }

    async fn storybook_flow(&mut self) -> Result<StorybookResult, StudioError> {
        let theme = self.user_text.trim().to_string();
        if theme.is_empty() {
            return Err(StudioError::EmptyPrompt);
        }
        self.quota.check()?;

        // Planner failure of any kind degrades to the templated script;
        // only the image calls can fail the whole run.
        let (script, degraded) = match self.planner.plan_scenes(&theme, self.options.age_group).await
        {
            Ok(script) => (script, false),
            Err(e) => {
                warn!("scene planner unusable, rendering fallback scenes: {e}");
                (StoryScript::fallback(&theme), true)
            }
        };

        // Scenes render through the plain classic framing so no subject
        // instruction or caption text leaks onto the pages.
        let scene_options = SessionOptions {
            mode: Mode::Classic {
                category: Category::All,
            },
            line_thickness: self.options.line_thickness,
            age_group: self.options.age_group,
        };
        let mut instructions = Vec::with_capacity(STORY_SCENE_COUNT);
        for scene in script.scenes() {
            instructions.push(build_generation_prompt(scene, &scene_options)?);
        }

        let images = self.images;
        let renders: Vec<_> = instructions
            .iter()
            .map(|instruction| images.generate(instruction))
            .collect();

        let mut pages = Vec::with_capacity(STORY_SCENE_COUNT);
        for outcome in join_all(renders).await {
            match outcome {
                Ok(artifact) => pages.push(artifact),
                Err(e) => {
                    return Err(StudioError::generation(GenerationContext::Storybook, e));
                }
            }
        }
        let pages: [Artifact; STORY_SCENE_COUNT] =
            pages.try_into().map_err(|leftover: Vec<Artifact>| {
                StudioError::generation(
                    GenerationContext::Storybook,
                    CollabError::MalformedPlan(format!(
                        "expected {STORY_SCENE_COUNT} pages, got {}",
                        leftover.len()
                    )),
                )
            })?;

        let evicted = self.history.push_batch(pages.clone());
        self.selection.prune(&evicted);
        self.story_pages = pages.to_vec();
        self.active = None;
        self.quota.record_success();

        info!(
            "storybook committed: {STORY_SCENE_COUNT} pages{}",
            if degraded { " from fallback scenes" } else { "" }
        );
        Ok(StorybookResult { pages, degraded })
    }

    /// Success path shared by the text and upload flows. The history
    /// commit happens before the quota increment.
    fn commit_single(&mut self, artifact: Artifact) {
        let evicted = self.history.push(artifact.clone());
        self.selection.prune(&evicted);
        self.active = Some(artifact);
        self.story_pages.clear();
        self.quota.record_success();
    }

    // ── Export ─────────────────────────────────────────────────────

    /// Compose the selected pages into a booklet, cover first, in click
    /// order. `Ok(None)` when nothing is selected. On success the
    /// selection is cleared and selection mode ends; on failure both stay
    /// so the user can retry without re-picking.
    pub async fn export_booklet(
        &mut self,
        title: Option<&str>,
    ) -> Result<Option<Vec<u8>>, StudioError> {
        if self.selection.is_empty() {
            return Ok(None);
        }
        self.begin_flight()?;
        let request = BookletRequest::new(
            self.selection.picks().to_vec(),
            title.unwrap_or(DEFAULT_BOOKLET_TITLE),
            today(),
        );
        info!(
            "booklet export: {} pages, title={:?}",
            request.pages.len(),
            request.title
        );
        let result = self.composer.compose_booklet(&request).await;
        self.in_flight = false;
        match result {
            Ok(bytes) => {
                self.selection.exit();
                Ok(Some(bytes))
            }
            Err(e) => Err(self.fail_export(e)),
        }
    }

    /// Compose the current story strip into a booklet titled after the
    /// theme. `Ok(None)` when no story is on the canvas. The booklet
    /// selection is not involved and stays untouched.
    pub async fn export_story(&mut self) -> Result<Option<Vec<u8>>, StudioError> {
        if self.story_pages.is_empty() {
            return Ok(None);
        }
        self.begin_flight()?;
        let theme = self.user_text.trim();
        let title = if theme.is_empty() {
            DEFAULT_STORY_TITLE
        } else {
            theme
        };
        let request = BookletRequest::new(self.story_pages.clone(), title, today());
        let result = self.composer.compose_booklet(&request).await;
        self.in_flight = false;
        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) => Err(self.fail_export(e)),
        }
    }

    /// Compose the page on the canvas as a single-page file. `Ok(None)`
    /// when the canvas is empty.
    pub async fn export_active_page(&mut self) -> Result<Option<Vec<u8>>, StudioError> {
        let Some(page) = self.active.clone() else {
            return Ok(None);
        };
        self.begin_flight()?;
        let result = self.composer.compose_single(&page).await;
        self.in_flight = false;
        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) => Err(self.fail_export(e)),
        }
    }

    fn fail_export(&mut self, source: CollabError) -> StudioError {
        let err = StudioError::Booklet { source };
        if let Some(message) = err.user_message() {
            self.last_error = Some(message);
        }
        err
    }
}

/// Today's date for the booklet cover.
fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// ── Tests ──────────────────────────────────────────────────────────
