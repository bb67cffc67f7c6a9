//! Property-based tests for panel markup escaping.

use mapfav::types::favorite::NewBookmark;
use mapfav::ui::markup::{escape_html, render_row};
use proptest::prelude::*;

/// Reverses `escape_html`.
fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn escaped_text_has_no_metacharacters(s in "\\PC{0,40}") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn rendered_row_has_fixed_element_count(name in "[<>\"'&a-z ]{1,20}") {
        let row = render_row(&NewBookmark::new(name, 1.0, 2.0).stamp(0));
        // li, two divs for the name, one for actions, three buttons.
        prop_assert_eq!(row.matches('<').count() - row.matches("</").count(), 7);
    }
}
