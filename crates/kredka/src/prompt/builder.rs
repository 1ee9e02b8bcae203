//! Labeled-section instruction builder.
//!
//! Image-model instructions are a fixed sequence of `Label: content` lines
//! (`Task:`, `Subject:`, `Art Style:`, ...). [`InstructionBuilder`] replaces
//! manual string concatenation with a small builder that keeps the section
//! order explicit and silently skips empty content.

/// Builder for multi-section image-model instructions.
///
/// Sections are joined with single newlines. Empty content (from
/// [`section_opt`](Self::section_opt) with `None`, or an empty string) is
/// skipped without leaving a dangling label.
///
/// # Example
///
/// ```
/// use kredka::prompt::InstructionBuilder;
///
/// let instruction = InstructionBuilder::new("Task", "Draw something.")
///     .section("Style", "clean lines")
///     .section_opt("Extras", None::<String>)
///     .section("Constraints", "black and white")
///     .build();
///
/// assert_eq!(
///     instruction,
///     "Task: Draw something.\nStyle: clean lines\nConstraints: black and white"
/// );
/// ```
#[derive(Debug)]
pub struct InstructionBuilder {
    lines: Vec<String>,
}

impl InstructionBuilder {
    /// Start an instruction with its task framing line.
    pub fn new(label: &str, content: impl Into<String>) -> Self {
        Self { lines: Vec::new() }.section(label, content)
    }

    /// Append a `Label: content` line. Skipped if `content` is empty.
    pub fn section(mut self, label: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.lines.push(format!("{label}: {content}"));
        }
        self
    }

    /// Append a section only if the content is `Some`.
    pub fn section_opt(self, label: &str, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.section(label, c),
            None => self,
        }
    }

    /// Join all sections into the final instruction string.
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}
