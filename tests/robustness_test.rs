use rs_page_cleaner::{clean_bytes, clean_html, extract_recipes_from_html, CleanOptions};
use std::time::{Duration, Instant};

#[test]
fn reduce_does_not_panic_on_malformed_html() {
    let inputs = [
        "<p>text<div>more",
        "<p><div></p></div>",
        "<html><body><article>content",
        "<div class=\"test id=broken>",
        "&amp text &lt;",
        "</p></p></div>",
        "<ul><li>one<li>two</ul>",
        "<table><td>cell</table>",
        "<a href=>empty</a>",
        "<img src>",
        "<!-- unterminated",
        "\u{0}\u{FEFF}<p>\u{200B}</p>",
    ];
    for html in inputs {
        let result = clean_html(html, &CleanOptions::default());
        assert!(!result.output.contains("<div"), "{html:?} -> {:?}", result.output);
    }
}

#[test]
fn empty_and_whitespace_input() {
    for html in ["", "   ", "\n\t\n", "<html></html>", "<html><body></body></html>"] {
        let result = clean_html(html, &CleanOptions::default());
        assert_eq!(result.output, "");
        assert_eq!(result.text_length, 0);
        assert_eq!(result.stats.empty_nodes, 0);
    }
}

#[test]
fn malformed_text_keeps_content() {
    let result = clean_html("<p>text<div>more", &CleanOptions::default());
    assert!(result.output.contains("text"));
    assert!(result.output.contains("more"));
}

#[test]
fn empty_href_is_stripped() {
    let result = clean_html(r#"<p><a href="">empty</a></p>"#, &CleanOptions::default());
    assert_eq!(result.output, "<p>empty</p>");
    assert_eq!(result.stats.stripped_links, 1);
}

#[test]
fn deeply_nested_wrappers_are_all_unwrapped() {
    let depth = 3_000;
    let html = format!("{}<p>deep</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let start = Instant::now();
    let result = clean_html(&html, &CleanOptions::default());
    assert!(start.elapsed() < Duration::from_secs(30));
    assert_eq!(result.output, "<p>deep</p>");
    assert_eq!(result.stats.unwrapped_nodes, depth);
}

#[test]
fn deeply_nested_inline_tags_are_kept() {
    let depth = 10_000;
    let html = format!("<p>{}x{}</p>", "<b>".repeat(depth), "</b>".repeat(depth));

    let start = Instant::now();
    let result = clean_html(&html, &CleanOptions::default());
    assert!(start.elapsed() < Duration::from_secs(30));
    assert!(result.output.starts_with("<p><b><b>"));
    assert_eq!(result.text_length, 1);
    assert_eq!(result.stats.empty_nodes, 0);
}

#[test]
fn deeply_nested_lists_render_as_minimal_text() {
    let depth = 10_000;
    let html = format!("{}x{}", "<ul><li>".repeat(depth), "</li></ul>".repeat(depth));
    let result = clean_html(
        &html,
        &CleanOptions {
            output_minimal_text: true,
            ..CleanOptions::default()
        },
    );
    assert_eq!(result.output, "- x");
    assert_eq!(result.text_length, 3);
}

#[test]
fn node_budget_caps_work_on_nested_input() {
    let depth = 500;
    let html = format!("{}<p>deep</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let result = clean_html(
        &html,
        &CleanOptions {
            max_depth: 100,
            ..CleanOptions::default()
        },
    );
    assert_eq!(result.stats.unwrapped_nodes, 100);
    assert!(result.output.contains("<div>"));
    assert!(result.output.contains("deep"));
}

#[test]
fn wide_input_is_fully_processed_under_default_budget() {
    let html = "<div><span>word</span></div>".repeat(2_000);
    let result = clean_html(&html, &CleanOptions::default());
    assert_eq!(result.stats.unwrapped_nodes, 4_000);
    assert!(!result.output.contains("<span"));
    assert_eq!(result.output.matches("word").count(), 2_000);
}

#[test]
fn budget_exhaustion_leaves_rest_untouched() {
    let result = clean_html(
        "<div><p>a</p></div><section><p>b</p></section>",
        &CleanOptions {
            max_depth: 1,
            ..CleanOptions::default()
        },
    );
    assert!(result.output.contains("<section>"));
    assert_eq!(result.stats.unwrapped_nodes, 1);
}

#[test]
fn invalid_utf8_bytes_are_replaced() {
    let result = clean_bytes(b"<p>ok \xFF\xFE bytes</p>", &CleanOptions::default());
    assert!(result.output.starts_with("<p>ok "));
    assert!(result.output.contains('\u{FFFD}'));
}

#[test]
fn json_ld_garbage_is_tolerated() {
    let html = r#"<script type="application/ld+json">{"@type": "Recipe", "name": [[[[</script>
                  <script type="application/ld+json"></script>
                  <script type="application/ld+json">null</script>
                  <script type="application/ld+json">"just a string"</script>"#;
    assert!(extract_recipes_from_html(html).is_empty());
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let options = CleanOptions {
                    keep_tables: i % 2 == 0,
                    ..CleanOptions::default()
                };
                clean_html("<table><tr><td>x</td></tr></table>", &options)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("thread");
        assert_eq!(result.output.contains("<td>"), i % 2 == 0);
    }
    assert!(!CleanOptions::default().allowed_tags.contains("td"));
}
