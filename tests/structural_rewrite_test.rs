//! Structural rewrite passes over the owned DOM

use kodegen_tools_pastedown::markdown_converter::html_preprocessing::{
    CheckboxMarker, RewriteStats, rewrite_structure,
};
use kodegen_tools_pastedown::markdown_converter::{DomTree, prepare_html};

fn rewrite(markup: &str) -> (String, RewriteStats) {
    let mut tree = DomTree::parse_fragment(markup);
    let stats = rewrite_structure(&mut tree);
    let html = tree.to_html();
    println!("Rewritten HTML:\n{}", html);
    (html, stats)
}

#[test]
fn test_headerless_table_promotes_first_row_only() {
    let (html, stats) =
        rewrite("<table><tr><td>Name</td><td>Qty</td></tr><tr><td>Nuts</td><td>4</td></tr><tr><td>Bolts</td><td>9</td></tr></table>");

    assert_eq!(stats.headers_inferred, 1);
    assert_eq!(
        html,
        "<table><thead><tr><th>Name</th><th>Qty</th></tr></thead>\
         <tbody><tr><td>Nuts</td><td>4</td></tr><tr><td>Bolts</td><td>9</td></tr></tbody></table>"
    );
}

#[test]
fn test_table_with_head_is_untouched() {
    let markup = "<table><thead><tr><th>h</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>";
    let (html, stats) = rewrite(markup);
    assert_eq!(stats.headers_inferred, 0);
    assert_eq!(html, markup);
}

#[test]
fn test_checkbox_detection_matches_leading_text_only() {
    let (html, stats) = rewrite("<p>[x] done</p><p>[ ] todo</p><p>see [x] here</p>");

    assert_eq!(stats.checkboxes_inserted, 2);
    assert_eq!(
        html,
        r#"<p><input type="checkbox" disabled="" checked="">done</p><p><input type="checkbox" disabled="">todo</p><p>see [x] here</p>"#
    );
}

#[test]
fn test_checkbox_in_later_sibling_is_ignored() {
    let (html, stats) = rewrite("<li><b>note</b> [x] not a task</li>");
    assert_eq!(stats.checkboxes_inserted, 0);
    assert_eq!(html, "<li><b>note</b> [x] not a task</li>");
}

#[test]
fn test_prose_starting_with_marker_is_converted() {
    // Accepted heuristic: a paragraph opening with "[x]" reads as a task
    let (html, _) = rewrite("<p>[x] marks the spot</p>");
    assert!(html.starts_with(r#"<p><input type="checkbox""#));
}

#[test]
fn test_lone_checkbox_paragraph_is_unwrapped() {
    let (html, stats) = rewrite("<ul><li><p>[x] shipped</p></li><li><p>[ ] pending</p></li></ul>");

    assert_eq!(stats.checkboxes_inserted, 2);
    assert_eq!(stats.paragraphs_unwrapped, 2);
    assert_eq!(
        html,
        r#"<ul><li><input type="checkbox" disabled="" checked="">shipped</li><li><input type="checkbox" disabled="">pending</li></ul>"#
    );
}

#[test]
fn test_paragraph_without_checkbox_is_kept() {
    let (html, stats) = rewrite("<ul><li><p>plain</p></li></ul>");
    assert_eq!(stats.paragraphs_unwrapped, 0);
    assert_eq!(html, "<ul><li><p>plain</p></li></ul>");
}

#[test]
fn test_prepare_html_sanitizes_before_rewriting() {
    let html = prepare_html(
        r#"<ul style="x"><li data-list="1"><p class="task" style="y">[ ] review</p></li></ul>"#,
    );
    assert_eq!(
        html,
        r#"<ul><li><input type="checkbox" disabled="">review</li></ul>"#
    );
}

#[test]
fn test_checkbox_marker_fields() {
    let marker = CheckboxMarker::detect("  [X]\tship it").expect("marker");
    assert!(marker.checked);
    assert_eq!(marker.matched_len, 6);
}
