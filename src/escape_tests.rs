use super::*;
use proptest::prelude::*;

#[test]
fn test_markup_escapes_script_tag() {
    let escaped = MarkupEscaper.escape_str("<script>alert(1)</script>");

    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn test_markup_escapes_ampersand() {
    assert_eq!(MarkupEscaper.escape_str("a & b"), "a &amp; b");
}

#[test]
fn test_markup_keeps_plain_text() {
    assert_eq!(MarkupEscaper.escape_str("cat hat bat"), "cat hat bat");
    assert_eq!(MarkupEscaper.escape_str(""), "");
}

#[test]
fn test_markup_keeps_control_characters_literal() {
    assert_eq!(MarkupEscaper.escape_str("a\tb\nc"), "a\tb\nc");
}

#[test]
fn test_non_text_yields_empty() {
    assert_eq!(MarkupEscaper.escape(None), "");
    assert_eq!(VerbatimEscaper.escape(None), "");
}

#[test]
fn test_verbatim_is_identity() {
    assert_eq!(VerbatimEscaper.escape_str("<b>&</b>"), "<b>&</b>");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Escaped output never opens a tag or an entity of its own.
    #[test]
    fn prop_markup_output_has_no_raw_angle_brackets(value in ".*") {
        let escaped = MarkupEscaper.escape_str(&value);

        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }

    #[test]
    fn prop_markup_without_specials_is_unchanged(value in "[^<>&]*") {
        prop_assert_eq!(MarkupEscaper.escape_str(&value), value);
    }
}
