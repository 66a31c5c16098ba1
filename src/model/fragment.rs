//! Positioned text fragments as delivered by the document parser.

use serde::{Deserialize, Serialize};

/// A single positioned run of text with font and transform metadata.
///
/// Fragments are immutable and carry no paragraph or column structure; the
/// pipeline infers body-text membership from the layout signals below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content of this run.
    pub text: String,
    /// Rendered height of the run in text-space units.
    pub height: f64,
    /// Affine transform `[a, b, c, d, e, f]` placing the run on the page.
    pub transform: [f64; 6],
    /// Identifier of the font resource used by this run.
    pub font_id: String,
}

impl TextFragment {
    /// Create a new text fragment.
    pub fn new(
        text: impl Into<String>,
        height: f64,
        transform: [f64; 6],
        font_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            height,
            transform,
            font_id: font_id.into(),
        }
    }

    /// Horizontal scale coefficient (`a`) of the transform.
    pub fn scale_x(&self) -> f64 {
        self.transform[0]
    }

    /// Vertical scale coefficient (`d`) of the transform.
    pub fn scale_y(&self) -> f64 {
        self.transform[3]
    }
}
