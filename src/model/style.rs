//! Font style descriptors and the per-document style table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque style descriptor for one font resource.
///
/// The pipeline never inspects these fields; they are carried through from
/// the document parser so callers can resolve font ids after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// CSS-style font family name.
    pub font_family: String,
    /// Ascent above the baseline, as a fraction of the font size.
    pub ascent: f64,
    /// Descent below the baseline, as a fraction of the font size.
    pub descent: f64,
    /// Whether the font is laid out vertically.
    pub vertical: bool,
}

/// Mapping from font id to its style descriptor.
///
/// When merged across pages, a later page's descriptor for the same font id
/// overwrites the earlier one (last-write-wins).
pub type StyleTable = HashMap<String, TextStyle>;
