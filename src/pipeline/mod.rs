//! The sentence-extraction pipeline.
//!
//! A linear four-stage transform over immutable inputs:
//! aggregate pages, classify modal layout features, filter body-text
//! fragments, segment into cleaned sentences. Only the aggregation stage is
//! concurrent; everything after its join barrier is single-threaded and
//! purely functional, so the pipeline is deterministic for a fixed fragment
//! sequence.

mod aggregate;
mod classify;
mod filter;
mod options;
mod segment;

pub use aggregate::{aggregate_fragments, AggregatedDocument};
pub use classify::{classify_fragments, FeatureHistogram, ModalClassification};
pub use filter::collect_body_text;
pub use options::ExtractOptions;
pub use segment::SentenceSegmenter;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::source::DocumentSource;

/// Run the full pipeline against a document source.
///
/// Returns the ordered sentence list, truncated to
/// [`ExtractOptions::sentence_limit`] when one is set.
pub fn run<S>(source: &S, options: &ExtractOptions, cancel: &CancelToken) -> Result<Vec<String>>
where
    S: DocumentSource + ?Sized,
{
    let document = aggregate_fragments(source, options.parallel, cancel)?;

    // A document with zero fragments has no modal features to reduce over;
    // short-circuit to an empty result instead of classifying.
    let Some(classification) = classify_fragments(&document.fragments) else {
        log::debug!("document has no fragments, returning empty sentence list");
        return Ok(Vec::new());
    };

    let body = collect_body_text(&document.fragments, &classification);
    let mut sentences = SentenceSegmenter::new().segment(&body);

    if let Some(limit) = options.sentence_limit {
        sentences.truncate(limit);
    }

    Ok(sentences)
}
