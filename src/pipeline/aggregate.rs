//! Fragment aggregation across pages.
//!
//! Pages are fetched with a fan-out/fan-in pattern: retrievals run
//! concurrently, and the collect below is the join barrier. The flattened
//! sequence is always in page order then within-page order, regardless of
//! fetch-completion order.

use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::model::{PageContent, StyleTable, TextFragment};
use crate::source::DocumentSource;

/// All fragments of a document in reading order, plus the merged style table.
#[derive(Debug, Clone, Default)]
pub struct AggregatedDocument {
    /// Fragments in document order (page order, then within-page order).
    pub fragments: Vec<TextFragment>,
    /// Style tables of all pages merged last-write-wins.
    pub styles: StyleTable,
}

/// Fetch every page and flatten into one ordered fragment sequence.
///
/// Any page failure fails the whole run; there are no partial results. The
/// cancellation token is honored before each page fetch and once more after
/// the join barrier.
pub fn aggregate_fragments<S>(
    source: &S,
    parallel: bool,
    cancel: &CancelToken,
) -> Result<AggregatedDocument>
where
    S: DocumentSource + ?Sized,
{
    let page_count = source.page_count()?;

    let pages: Vec<PageContent> = if parallel {
        (0..page_count)
            .into_par_iter()
            .map(|index| {
                cancel.check()?;
                source.get_page(index)
            })
            .collect::<Result<_>>()?
    } else {
        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            cancel.check()?;
            pages.push(source.get_page(index)?);
        }
        pages
    };

    cancel.check()?;

    let mut fragments = Vec::new();
    let mut styles = StyleTable::new();
    for page in pages {
        fragments.extend(page.fragments);
        // Later pages overwrite colliding font ids; collisions are not errors.
        styles.extend(page.styles);
    }

    log::debug!(
        "aggregated {} fragments and {} styles across {} pages",
        fragments.len(),
        styles.len(),
        page_count
    );

    Ok(AggregatedDocument { fragments, styles })
}
