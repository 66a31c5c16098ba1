//! Extraction options and configuration.

/// Options for a sentence-extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum number of sentences to return (`None` = no truncation).
    ///
    /// The default is no truncation; callers that only want a preview (the
    /// historical behavior was the first three sentences) opt in explicitly.
    pub sentence_limit: Option<usize>,

    /// Whether to fetch pages in parallel.
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate the result to at most `limit` sentences.
    pub fn with_sentence_limit(mut self, limit: usize) -> Self {
        self.sentence_limit = Some(limit);
        self
    }

    /// Enable or disable parallel page fetching.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fetch pages sequentially.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sentence_limit: None,
            parallel: true,
        }
    }
}
