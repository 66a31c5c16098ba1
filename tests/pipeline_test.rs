//! Integration tests for the full extraction pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use pdfgist::error::Result;
use pdfgist::{
    extract_sentences, extract_sentences_with_options, CancelToken, DocumentSource, Error,
    ExtractOptions, Extractor, InMemorySource, PageContent, StyleTable, TextFragment, TextStyle,
};

fn fragment(text: &str, height: f64, scale: f64, font_id: &str) -> TextFragment {
    TextFragment::new(text, height, [scale, 0.0, 0.0, scale, 0.0, 0.0], font_id)
}

fn style(family: &str, size: f64) -> TextStyle {
    TextStyle {
        font_family: family.to_string(),
        ascent: size / 12.0,
        descent: -0.2,
        vertical: false,
    }
}

/// The three-fragment modal scenario: two body fragments at height 10 in
/// font F1, one footnote at height 12 in F2. Only body text survives, and
/// the capitalized second sentence stays attached to the first (boundaries
/// only open before lowercase letters).
#[test]
fn test_modal_scenario() {
    let page = PageContent::with_fragments(vec![
        fragment("Hello world.", 10.0, 1.0, "F1"),
        fragment("This is body.", 10.0, 1.0, "F1"),
        fragment("Footnote text.", 12.0, 1.0, "F2"),
    ]);
    let source = InMemorySource::new(vec![page]);

    let sentences = extract_sentences(&source).unwrap();
    assert_eq!(sentences, vec!["Hello world. This is body."]);
    assert!(sentences.iter().all(|s| !s.contains("Footnote")));
}

#[test]
fn test_lowercase_continuations_split() {
    let page = PageContent::with_fragments(vec![
        fragment("the method works.", 10.0, 1.0, "F1"),
        fragment("results [3,4] are strong.", 10.0, 1.0, "F1"),
        fragment("further exam- ples follow.", 10.0, 1.0, "F1"),
    ]);
    let source = InMemorySource::new(vec![page]);

    let sentences = extract_sentences(&source).unwrap();
    assert_eq!(
        sentences,
        vec![
            "the method works.",
            "results  are strong.",
            "further examples follow.",
        ]
    );
}

#[test]
fn test_empty_document_returns_empty_list() {
    let source = InMemorySource::new(vec![]);
    assert!(extract_sentences(&source).unwrap().is_empty());

    // Pages exist but carry no fragments.
    let source = InMemorySource::new(vec![PageContent::default(), PageContent::default()]);
    assert!(extract_sentences(&source).unwrap().is_empty());
}

#[test]
fn test_sentence_limit_truncates() {
    let page = PageContent::with_fragments(vec![fragment(
        "one. two. three. four. five.",
        10.0,
        1.0,
        "F1",
    )]);
    let source = InMemorySource::new(vec![page]);

    let all = extract_sentences(&source).unwrap();
    assert_eq!(all.len(), 5);

    let options = ExtractOptions::new().with_sentence_limit(3);
    let limited = extract_sentences_with_options(&source, &options).unwrap();
    assert_eq!(limited, vec!["one.", "two.", "three."]);
}

#[test]
fn test_pipeline_is_deterministic() {
    let pages = vec![
        PageContent::with_fragments(vec![
            fragment("alpha one. beta two.", 10.0, 1.0, "F1"),
            fragment("Caption", 8.0, 0.8, "F3"),
        ]),
        PageContent::with_fragments(vec![fragment("gamma three.", 10.0, 1.0, "F1")]),
    ];
    let source = InMemorySource::new(pages);

    let first = extract_sentences(&source).unwrap();
    let second = extract_sentences(&source).unwrap();
    assert_eq!(first, second);

    // Sequential aggregation must agree with the parallel default.
    let sequential = Extractor::new().sequential().extract(&source).unwrap();
    assert_eq!(first, sequential);
}

#[test]
fn test_tie_break_prefers_first_encountered_height() {
    // Heights 10 and 12 tie two-to-two in font F1; 10 is seen first, so
    // only the height-10 fragments survive the height signal. The height-12
    // fragments still match through the tied scale signal, which is also
    // first-encountered: scale 1.0 wins its own tie against 1.5.
    let page = PageContent::with_fragments(vec![
        fragment("first body.", 10.0, 1.0, "F1"),
        fragment("tall aside.", 12.0, 1.5, "F1"),
        fragment("second body.", 10.0, 1.0, "F1"),
        fragment("another aside.", 12.0, 1.5, "F1"),
    ]);
    let source = InMemorySource::new(vec![page]);

    let sentences = extract_sentences(&source).unwrap();
    assert_eq!(sentences, vec!["first body.", "second body."]);
}

#[test]
fn test_style_tables_merge_last_write_wins() {
    let mut styles_a = StyleTable::new();
    styles_a.insert("F1".to_string(), style("serif", 10.0));
    let mut styles_b = StyleTable::new();
    styles_b.insert("F1".to_string(), style("serif", 12.0));

    let pages = vec![
        PageContent::new(vec![fragment("body text.", 10.0, 1.0, "F1")], styles_a),
        PageContent::new(vec![fragment("more body.", 10.0, 1.0, "F1")], styles_b),
    ];

    let doc = pdfgist::pipeline::aggregate_fragments(
        &InMemorySource::new(pages),
        true,
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(doc.styles.len(), 1);
    assert_eq!(doc.styles["F1"], style("serif", 12.0));
}

/// Source that counts page fetches, to show each page is visited exactly
/// once per run.
struct CountingSource {
    pages: Vec<PageContent>,
    fetches: AtomicUsize,
}

impl DocumentSource for CountingSource {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn get_page(&self, index: usize) -> Result<PageContent> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}

#[test]
fn test_each_page_fetched_once() {
    let source = CountingSource {
        pages: vec![
            PageContent::with_fragments(vec![fragment("a.", 10.0, 1.0, "F1")]),
            PageContent::with_fragments(vec![fragment("b.", 10.0, 1.0, "F1")]),
            PageContent::with_fragments(vec![fragment("c.", 10.0, 1.0, "F1")]),
        ],
        fetches: AtomicUsize::new(0),
    };

    extract_sentences(&source).unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 3);
}

/// Source whose second page is unreadable.
struct BrokenSource;

impl DocumentSource for BrokenSource {
    fn page_count(&self) -> Result<usize> {
        Ok(2)
    }

    fn get_page(&self, index: usize) -> Result<PageContent> {
        if index == 1 {
            Err(Error::DocumentParse("damaged object stream".to_string()))
        } else {
            Ok(PageContent::with_fragments(vec![fragment(
                "intact page.",
                10.0,
                1.0,
                "F1",
            )]))
        }
    }
}

#[test]
fn test_partial_page_failure_fails_whole_run() {
    let result = extract_sentences(&BrokenSource);
    assert!(matches!(result, Err(Error::DocumentParse(_))));
}

#[test]
fn test_cancelled_run_returns_cancelled() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let source = InMemorySource::new(vec![PageContent::with_fragments(vec![fragment(
        "body.",
        10.0,
        1.0,
        "F1",
    )])]);

    let result = Extractor::new()
        .with_cancel_token(cancel)
        .extract(&source);
    assert!(matches!(result, Err(Error::Cancelled)));
}

#[test]
fn test_fragments_ordered_across_pages() {
    let pages: Vec<PageContent> = (0..6)
        .map(|i| {
            PageContent::with_fragments(vec![fragment(
                &format!("page {i} sentence."),
                10.0,
                1.0,
                "F1",
            )])
        })
        .collect();
    let source = InMemorySource::new(pages);

    let sentences = extract_sentences(&source).unwrap();
    // "page" starts lowercase, so every continuation opens a boundary.
    assert_eq!(sentences.len(), 6);
    for (i, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence, &format!("page {i} sentence."));
    }
}

#[test]
fn test_styles_unused_by_classification() {
    // An empty style table never prevents extraction; styles are carried
    // for callers, not consumed by the pipeline.
    let mut styles = HashMap::new();
    styles.insert("F9".to_string(), style("mono", 9.0));
    let pages = vec![PageContent::new(
        vec![fragment("still works.", 10.0, 1.0, "F1")],
        styles,
    )];

    let sentences = extract_sentences(&InMemorySource::new(pages)).unwrap();
    assert_eq!(sentences, vec!["still works."]);
}
