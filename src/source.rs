//! Document-parsing collaborator interface.
//!
//! The pipeline never parses documents itself; it consumes positioned
//! fragments from any [`DocumentSource`]. Implementations wrap an actual
//! parser (or, for tests, an in-memory page list).

use crate::error::{Error, Result};
use crate::model::PageContent;

/// Provider of per-page positioned fragments and style tables.
///
/// `Sync` is required so page fetches can fan out across threads. Page
/// indices are zero-based; `get_page` must be callable in any order since
/// fetch-completion order is not defined under parallel aggregation.
pub trait DocumentSource: Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Fetch one page's fragments and styles.
    ///
    /// Parse failures should surface as [`Error::DocumentParse`]; any page
    /// failure fails the whole extraction run.
    fn get_page(&self, index: usize) -> Result<PageContent>;
}

/// A document source backed by pre-parsed pages held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: Vec<PageContent>,
}

impl InMemorySource {
    /// Create a source from pages in document order.
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }
}

impl DocumentSource for InMemorySource {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn get_page(&self, index: usize) -> Result<PageContent> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}
