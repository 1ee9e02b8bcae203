//! Booklet export boundary.
//!
//! Turning selected pages into a printable file is a collaborator concern
//! (the engine never touches a PDF library), but the layout contract is
//! fixed here: an A4 title page with the booklet name and creation date,
//! then one page per artifact, each image fit within a fixed margin with
//! its aspect ratio preserved and centered both ways. [`fit_to_page`] is
//! that placement rule, shared by every composer implementation; the
//! single-page export uses a narrower margin than the booklet.

use chrono::NaiveDate;

use crate::Artifact;
use crate::api::CollabFuture;

/// A4 page size in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Margin around each image on a booklet page.
pub const BOOKLET_MARGIN_MM: f64 = 15.0;

/// Margin for the one-off single-page export.
pub const SINGLE_PAGE_MARGIN_MM: f64 = 10.0;

/// Default booklet title when the user supplies none.
pub const DEFAULT_BOOKLET_TITLE: &str = "Moja Kolorowanka";

/// Default title for an exported storybook.
pub const DEFAULT_STORY_TITLE: &str = "Moja Historyjka";

/// Everything a composer needs to lay out one booklet.
#[derive(Debug, Clone)]
pub struct BookletRequest {
    /// Pages in export order (selection click order, or story order).
    pub pages: Vec<Artifact>,
    /// Title printed on the cover page.
    pub title: String,
    /// Creation date printed under the title.
    pub created_on: NaiveDate,
}

impl BookletRequest {
    pub fn new(pages: Vec<Artifact>, title: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            pages,
            title: title.into(),
            created_on,
        }
    }

    /// Download name derived from the title: lowercased, whitespace runs
    /// collapsed to single underscores.
    pub fn suggested_file_name(&self) -> String {
        let stem: Vec<String> = self
            .title
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect();
        format!("{}.pdf", stem.join("_"))
    }
}

/// Composes printable documents from finished pages.
///
/// Implementations clone what they need from the borrowed request into the
/// returned future, mirroring the generation traits.
pub trait BookletComposer: Send + Sync {
    /// Cover page plus one page per artifact, in request order.
    fn compose_booklet(&self, request: &BookletRequest) -> CollabFuture<'_, Vec<u8>>;

    /// One artifact on one page, no cover.
    fn compose_single(&self, page: &Artifact) -> CollabFuture<'_, Vec<u8>>;
}

/// An image's position and size on a page, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fits an image inside the page margins, preserving aspect ratio.
///
/// The image is first scaled to the available width; if that overflows the
/// available height it is scaled to the height instead. Either way it ends
/// up centered on both axes.
pub fn fit_to_page(
    img_width: f64,
    img_height: f64,
    page_width: f64,
    page_height: f64,
    margin: f64,
) -> PlacedImage {
    let available_width = page_width - margin * 2.0;
    let available_height = page_height - margin * 2.0;
    let ratio = img_width / img_height;

    let mut width = available_width;
    let mut height = available_width / ratio;

    if height > available_height {
        height = available_height;
        width = available_height * ratio;
    }

    PlacedImage {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
    }
}
