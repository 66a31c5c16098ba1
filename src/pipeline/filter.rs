//! Body-text selection and concatenation.

use crate::model::TextFragment;

use super::classify::ModalClassification;

/// Concatenate the text of all body fragments in document order.
///
/// Fragments failing the [`ModalClassification::matches`] predicate
/// contribute nothing. Matching texts are joined by a single space; the
/// original inter-fragment spacing and layout is discarded.
pub fn collect_body_text(
    fragments: &[TextFragment],
    classification: &ModalClassification,
) -> String {
    let selected: Vec<&str> = fragments
        .iter()
        .filter(|fragment| classification.matches(fragment))
        .map(|fragment| fragment.text.as_str())
        .collect();

    log::debug!(
        "selected {} of {} fragments as body text",
        selected.len(),
        fragments.len()
    );

    selected.join(" ")
}
