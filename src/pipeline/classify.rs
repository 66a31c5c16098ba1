//! Modal layout-feature classification.
//!
//! Builds exact-value frequency histograms over three numeric layout signals
//! (height, horizontal scale, vertical scale) and one categorical signal
//! (font id), then takes the most frequent value of each. Body text
//! dominates most documents, so the modal values describe the primary body
//! style; headers, footnotes and captions fall outside it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::model::TextFragment;

/// Exact-value occurrence counts for one layout feature.
///
/// Keys are never rounded or binned. Besides the counts, the histogram
/// remembers the order in which distinct keys were first seen, so modal
/// selection stays deterministic when counts tie.
#[derive(Debug, Clone, Default)]
pub struct FeatureHistogram<K> {
    counts: HashMap<K, usize>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> FeatureHistogram<K> {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Count one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        match self.counts.entry(key.clone()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
                self.order.push(key);
            }
        }
    }

    /// Occurrences recorded for `key`.
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Total occurrences across all keys.
    ///
    /// Always equals the number of `record` calls, and therefore the number
    /// of fragments when one feature is recorded per fragment.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Whether the histogram has no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The key with the maximum count, or `None` for an empty histogram.
    ///
    /// Ties are broken in favor of the key first encountered: the scan runs
    /// in first-seen order and only a strictly greater count replaces the
    /// current best.
    pub fn modal(&self) -> Option<&K> {
        let mut best: Option<(&K, usize)> = None;
        for key in &self.order {
            let count = self.counts[key];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((key, count));
            }
        }
        best.map(|(key, _)| key)
    }
}

/// The modal value of each tracked layout feature.
///
/// Computed exactly once per document and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalClassification {
    /// Most frequent fragment height.
    pub height: f64,
    /// Most frequent horizontal scale coefficient.
    pub scale_x: f64,
    /// Most frequent vertical scale coefficient.
    pub scale_y: f64,
    /// Most frequent font id.
    pub font_id: String,
}

impl ModalClassification {
    /// Body-text predicate: the fragment matches at least one modal numeric
    /// feature and uses the modal font.
    ///
    /// Numeric comparisons are bitwise-exact, consistent with the histogram
    /// keying; no tolerance is applied.
    pub fn matches(&self, fragment: &TextFragment) -> bool {
        let layout_match = bits_eq(fragment.height, self.height)
            || bits_eq(fragment.scale_x(), self.scale_x)
            || bits_eq(fragment.scale_y(), self.scale_y);
        layout_match && fragment.font_id == self.font_id
    }
}

fn bits_eq(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

/// Compute the modal classification for a fragment sequence.
///
/// Returns `None` when the sequence is empty; the modal value of an empty
/// histogram is undefined and callers must short-circuit instead.
pub fn classify_fragments(fragments: &[TextFragment]) -> Option<ModalClassification> {
    if fragments.is_empty() {
        return None;
    }

    let mut heights = FeatureHistogram::new();
    let mut scales_x = FeatureHistogram::new();
    let mut scales_y = FeatureHistogram::new();
    let mut fonts = FeatureHistogram::new();

    for fragment in fragments {
        heights.record(fragment.height.to_bits());
        scales_x.record(fragment.scale_x().to_bits());
        scales_y.record(fragment.scale_y().to_bits());
        fonts.record(fragment.font_id.clone());
    }

    debug_assert_eq!(heights.total(), fragments.len());
    debug_assert_eq!(fonts.total(), fragments.len());

    let classification = ModalClassification {
        height: f64::from_bits(*heights.modal()?),
        scale_x: f64::from_bits(*scales_x.modal()?),
        scale_y: f64::from_bits(*scales_y.modal()?),
        font_id: fonts.modal()?.clone(),
    };

    log::debug!(
        "modal classification: height={}, scale_x={}, scale_y={}, font_id={}",
        classification.height,
        classification.scale_x,
        classification.scale_y,
        classification.font_id
    );

    Some(classification)
}
