//! Per-page parse results.

use serde::{Deserialize, Serialize};

use super::{StyleTable, TextFragment};

/// One page's worth of positioned fragments plus its font style table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Fragments in within-page reading order, as delivered by the parser.
    pub fragments: Vec<TextFragment>,
    /// Styles for the fonts referenced on this page.
    pub styles: StyleTable,
}

impl PageContent {
    /// Create page content from fragments and styles.
    pub fn new(fragments: Vec<TextFragment>, styles: StyleTable) -> Self {
        Self { fragments, styles }
    }

    /// Page content holding only fragments, with an empty style table.
    pub fn with_fragments(fragments: Vec<TextFragment>) -> Self {
        Self {
            fragments,
            styles: StyleTable::new(),
        }
    }
}
