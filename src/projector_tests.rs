use super::*;
use crate::escape::{MarkupEscaper, VerbatimEscaper};
use crate::report::MatchReport;
use proptest::prelude::*;

fn pairs(projection: &Projection) -> Vec<(&str, bool)> {
    projection
        .segments()
        .iter()
        .map(|s| (s.content.as_str(), s.is_match))
        .collect()
}

#[test]
fn test_cat_hat_bat_end_to_end() {
    let text = "cat hat bat";
    let raw = vec![
        MatchSpan::new(0, 3, "cat"),
        MatchSpan::new(4, 7, "hat"),
        MatchSpan::new(8, 11, "bat"),
    ];

    let report = MatchReport::build(&raw);
    let projection = project(text, &report.spans, &VerbatimEscaper);

    assert_eq!(report.count, 3);
    assert_eq!(
        pairs(&projection),
        vec![
            ("cat", true),
            (" ", false),
            ("hat", true),
            (" ", false),
            ("bat", true),
        ]
    );
    assert_eq!(projection.cursor(), 11);
}

#[test]
fn test_no_matches_yields_whole_text() {
    let projection = project("plain text", &[], &VerbatimEscaper);

    assert_eq!(pairs(&projection), vec![("plain text", false)]);
    assert_eq!(projection.cursor(), 0);
}

#[test]
fn test_empty_text_yields_empty_projection() {
    let projection = project("", &[MatchSpan::new(0, 0, "")], &VerbatimEscaper);

    assert!(projection.is_empty());
}

#[test]
fn test_zero_length_match() {
    let projection = project("abcdef", &[MatchSpan::new(3, 3, "")], &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("abc", false), ("", true), ("def", false)]
    );
}

#[test]
fn test_overlap_is_last_write_wins() {
    let spans = vec![MatchSpan::new(0, 5, "AAAAA"), MatchSpan::new(2, 8, "BBBBBB")];

    let projection = project("0123456789", &spans, &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("AAAAA", true), ("BBBBBB", true), ("89", false)]
    );
    assert_eq!(projection.cursor(), 8);
}

#[test]
fn test_contained_span_does_not_move_cursor_back() {
    let spans = vec![MatchSpan::new(0, 6, "abcdef"), MatchSpan::new(1, 3, "bc")];

    let projection = project("abcdefgh", &spans, &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("abcdef", true), ("bc", true), ("gh", false)]
    );
    assert_eq!(projection.cursor(), 6);
}

#[test]
fn test_matched_text_is_used_verbatim() {
    let projection = project("abcdef", &[MatchSpan::new(1, 3, "XY")], &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("a", false), ("XY", true), ("def", false)]
    );
}

#[test]
fn test_every_segment_is_escaped() {
    let text = "<a> & <b>";
    let spans = vec![MatchSpan::new(4, 5, "&")];

    let projection = project(text, &spans, &MarkupEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("&lt;a&gt; ", false), ("&amp;", true), (" &lt;b&gt;", false)]
    );
}

#[test]
fn test_offsets_are_chars() {
    let text = "naïve café";
    let spans = vec![MatchSpan::new(6, 10, "café")];

    let projection = project(text, &spans, &VerbatimEscaper);

    assert_eq!(pairs(&projection), vec![("naïve ", false), ("café", true)]);
}

#[test]
fn test_out_of_range_span_does_not_panic() {
    let spans = vec![MatchSpan::new(2, 40, "cdef"), MatchSpan::new(50, 60, "zz")];

    let projection = project("abcdef", &spans, &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("ab", false), ("cdef", true), ("zz", true)]
    );
    assert_eq!(projection.cursor(), 60);
}

#[test]
fn test_inverted_span_does_not_panic() {
    let spans = vec![MatchSpan::new(4, 2, "??")];

    let projection = project("abcdef", &spans, &VerbatimEscaper);

    assert_eq!(
        pairs(&projection),
        vec![("abcd", false), ("??", true), ("cdef", false)]
    );
    assert_eq!(projection.cursor(), 2);
}

#[test]
fn test_match_segments_filter() {
    let spans = vec![MatchSpan::new(0, 1, "a"), MatchSpan::new(2, 3, "c")];

    let projection = project("abc", &spans, &VerbatimEscaper);

    assert_eq!(projection.match_segments().count(), 2);
    assert_eq!(projection.joined(), "abc");
}

#[test]
fn test_misaligned_spans_reports_mismatches() {
    let text = "cat hat";
    let spans = vec![MatchSpan::new(0, 3, "cat"), MatchSpan::new(3, 6, "hat")];

    assert_eq!(misaligned_spans(text, &spans), vec![1]);
}

fn word_per_match(words: usize) -> (String, Vec<MatchSpan>) {
    let text = "wörd ".repeat(words);
    let spans = (0..words)
        .map(|i| MatchSpan::new(i * 5, i * 5 + 4, "wörd"))
        .collect();
    (text, spans)
}

#[test]
fn test_large_input_projects_in_linear_time() {
    // 100k chars with 20k matches; slicing from the start of the text for
    // every span would take seconds here
    let (text, spans) = word_per_match(20_000);
    let started = std::time::Instant::now();

    let projection = project(&text, &spans, &MarkupEscaper);
    let misaligned = misaligned_spans(&text, &spans);

    assert!(
        started.elapsed() < std::time::Duration::from_secs(2),
        "projection took {:?}",
        started.elapsed()
    );
    assert_eq!(projection.match_segments().count(), 20_000);
    assert_eq!(projection.segments().len(), 40_000);
    assert_eq!(projection.cursor(), 99_999);
    assert_eq!(projection.joined(), text);
    assert!(misaligned.is_empty());
}

/// Text split into alternating plain/match runs, with the spans for the
/// match runs computed in char offsets.
fn text_with_spans() -> impl Strategy<Value = (String, Vec<MatchSpan>)> {
    prop::collection::vec(("[a-zé<& ]{0,6}", any::<bool>()), 0..12).prop_map(|runs| {
        let mut text = String::new();
        let mut spans = Vec::new();
        let mut offset = 0;
        for (run, is_match) in runs {
            let len = run.chars().count();
            if is_match {
                spans.push(MatchSpan::new(offset, offset + len, run.clone()));
            }
            text.push_str(&run);
            offset += len;
        }
        (text, spans)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Sorted, non-overlapping spans that agree with the text reconstruct it exactly.
    #[test]
    fn prop_full_coverage((text, spans) in text_with_spans()) {
        let projection = project(&text, &spans, &VerbatimEscaper);

        prop_assert_eq!(projection.joined(), text);
    }

    #[test]
    fn prop_match_segments_follow_spans((text, spans) in text_with_spans()) {
        prop_assume!(!text.is_empty());
        let projection = project(&text, &spans, &VerbatimEscaper);

        let matched: Vec<&str> = projection.match_segments().map(|s| s.content.as_str()).collect();
        let expected: Vec<&str> = spans.iter().map(|s| s.matched_text.as_str()).collect();
        prop_assert_eq!(matched, expected);
    }

    // Arbitrary offsets, overlaps included, never panic.
    #[test]
    fn prop_total_over_arbitrary_spans(
        text in ".{0,20}",
        raw in prop::collection::vec((0usize..30, 0usize..30), 0..10),
    ) {
        let spans: Vec<MatchSpan> = raw
            .into_iter()
            .map(|(start, end)| MatchSpan::new(start, end, "m"))
            .collect();
        let report = MatchReport::build(&spans);

        let projection = project(&text, &report.spans, &MarkupEscaper);

        if !text.is_empty() {
            prop_assert_eq!(projection.match_segments().count(), spans.len());
        }
    }
}
