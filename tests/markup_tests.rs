// Host-side tests for menu markup escaping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

mod markup {
    include!("../src/markup.rs");
}

use markup::escape;

#[test]
fn plain_labels_pass_through() {
    assert_eq!(escape("Auto Rotate"), "Auto Rotate");
    assert_eq!(escape("#64ffda"), "#64ffda");
    assert_eq!(escape(""), "");
}

#[test]
fn quotes_cannot_close_a_single_quoted_attribute() {
    let attr = format!("data-item='{}'", escape("Designer's Pick"));
    assert_eq!(attr, "data-item='Designer&#39;s Pick'");
    assert_eq!(attr.matches('\'').count(), 2);
}

#[test]
fn markup_characters_are_entities() {
    assert_eq!(escape("<b>Salt & \"Pepper\"</b>"), "&lt;b&gt;Salt &amp; &quot;Pepper&quot;&lt;/b&gt;");
}
