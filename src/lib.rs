//! # pdfgist
//!
//! Representative-sentence extraction from positioned PDF text fragments.
//!
//! Document parsers deliver page content as loose, positioned text runs with
//! no paragraph or column structure. This library infers which runs belong
//! to the document's primary body text by majority vote over four layout
//! signals (height, horizontal scale, vertical scale, font id), concatenates
//! the matches in reading order, and segments the result into cleaned
//! sentences.
//!
//! ## Quick Start
//!
//! ```
//! use pdfgist::{extract_sentences, InMemorySource, PageContent, TextFragment};
//!
//! fn main() -> pdfgist::Result<()> {
//!     let page = PageContent::with_fragments(vec![
//!         TextFragment::new("the method works.", 10.0, [10.0, 0.0, 0.0, 10.0, 72.0, 700.0], "F1"),
//!         TextFragment::new("results are strong.", 10.0, [10.0, 0.0, 0.0, 10.0, 72.0, 680.0], "F1"),
//!         TextFragment::new("1 Footnote", 7.0, [7.0, 0.0, 0.0, 7.0, 72.0, 60.0], "F2"),
//!     ]);
//!     let source = InMemorySource::new(vec![page]);
//!
//!     let sentences = extract_sentences(&source)?;
//!     assert_eq!(sentences, vec!["the method works.", "results are strong."]);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heuristic summarization**: extracts representative body-text
//!   sentences, not a complete text dump
//! - **Deterministic classification**: exact-value histograms with a
//!   documented first-encountered tie-break
//! - **Parallel page aggregation**: fan-out/fan-in over Rayon, joined before
//!   any classification starts
//! - **Cooperative cancellation**: honored at each page fetch and at the
//!   join barrier
//! - **Decoupled collaborators**: page rendering and translation live behind
//!   their own interfaces and never affect extraction

pub mod cancel;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod translate;

// Re-export commonly used types
pub use cancel::CancelToken;
pub use error::{Error, Result, TranslationError};
pub use model::{PageContent, StyleTable, TextFragment, TextStyle};
pub use pipeline::{
    ExtractOptions, FeatureHistogram, ModalClassification, SentenceSegmenter,
};
pub use render::{Bitmap, PageRenderer, RenderTracker};
pub use source::{DocumentSource, InMemorySource};
pub use translate::Translator;

/// Extract sentences from a document source with default options.
///
/// # Example
///
/// ```no_run
/// use pdfgist::{extract_sentences, InMemorySource};
///
/// let source = InMemorySource::new(vec![]);
/// let sentences = extract_sentences(&source).unwrap();
/// assert!(sentences.is_empty());
/// ```
pub fn extract_sentences<S>(source: &S) -> Result<Vec<String>>
where
    S: DocumentSource + ?Sized,
{
    extract_sentences_with_options(source, &ExtractOptions::default())
}

/// Extract sentences with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfgist::{extract_sentences_with_options, ExtractOptions, InMemorySource};
///
/// let source = InMemorySource::new(vec![]);
/// let options = ExtractOptions::new().with_sentence_limit(3);
/// let preview = extract_sentences_with_options(&source, &options).unwrap();
/// # let _ = preview;
/// ```
pub fn extract_sentences_with_options<S>(
    source: &S,
    options: &ExtractOptions,
) -> Result<Vec<String>>
where
    S: DocumentSource + ?Sized,
{
    pipeline::run(source, options, &CancelToken::new())
}

/// Builder for configured extraction runs.
///
/// # Example
///
/// ```no_run
/// use pdfgist::{Extractor, InMemorySource};
///
/// let source = InMemorySource::new(vec![]);
/// let sentences = Extractor::new()
///     .with_sentence_limit(3)
///     .sequential()
///     .extract(&source)?;
/// # let _ = sentences;
/// # Ok::<(), pdfgist::Error>(())
/// ```
pub struct Extractor {
    options: ExtractOptions,
    cancel: CancelToken,
}

impl Extractor {
    /// Create a new extractor with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            cancel: CancelToken::new(),
        }
    }

    /// Truncate the result to at most `limit` sentences.
    pub fn with_sentence_limit(mut self, limit: usize) -> Self {
        self.options = self.options.with_sentence_limit(limit);
        self
    }

    /// Fetch pages sequentially instead of in parallel.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Use an externally owned cancellation token.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run the pipeline against a document source.
    pub fn extract<S>(&self, source: &S) -> Result<Vec<String>>
    where
        S: DocumentSource + ?Sized,
    {
        pipeline::run(source, &self.options, &self.cancel)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
