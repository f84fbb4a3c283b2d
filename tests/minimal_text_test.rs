use rs_page_cleaner::{clean_html, parse, render_minimal_text, CleanOptions, HeadingStyle, MinimalTextOptions};

fn minimal() -> CleanOptions {
    CleanOptions {
        output_minimal_text: true,
        ..CleanOptions::default()
    }
}

#[test]
fn structural_mapping() {
    let html = r#"
        <html><body>
          <div class="article">
            <h1 class="title">Title</h1>
            <p>Intro</p>
            <ul>
              <li>Item 1</li>
              <li>Item 2
                <ul><li>Nested item</li></ul>
              </li>
            </ul>
            <table><tr><td>Cell 1</td><td>Cell 2</td></tr></table>
          </div>
        </body></html>"#;

    let result = clean_html(html, &minimal());
    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(
        lines,
        [
            "# Title",
            "",
            "Intro",
            "",
            "- Item 1",
            "- Item 2",
            "- Nested item",
            "",
            "Cell 1\tCell 2",
        ]
    );
    assert!(!result.output.starts_with('\n'));
    assert!(!result.output.ends_with('\n'));
}

#[test]
fn text_length_is_measured_on_rendered_text() {
    let result = clean_html("<h2>Dough</h2><p>Knead</p>", &minimal());
    assert_eq!(result.output, "## Dough\n\nKnead");
    assert_eq!(result.text_length, "## Dough Knead".len());
}

#[test]
fn minimal_mode_still_sanitizes() {
    let html = r#"<nav>Menu</nav><p>Mix <a href="javascript:void(0)">well</a>.</p><script>x()</script>"#;
    let result = clean_html(html, &minimal());
    assert_eq!(result.output, "Mix well.");
    assert_eq!(result.stats.stripped_links, 1);
}

#[test]
fn breaks_inside_paragraphs_are_lines() {
    let result = clean_html("<p>2 eggs<br>1 cup milk</p><p>Whisk.</p>", &minimal());
    assert_eq!(result.output, "2 eggs\n1 cup milk\n\nWhisk.");
}

#[test]
fn no_runs_of_blank_lines() {
    let html = "<h1>A</h1><p> </p><div><p></p></div><ul><li></li></ul><p>B</p>";
    let result = clean_html(html, &minimal());
    assert_eq!(result.output, "# A\n\nB");
    assert!(!result.output.contains("\n\n\n"));
}

#[test]
fn custom_rendering_options() {
    let options = CleanOptions {
        output_minimal_text: true,
        minimal_text: MinimalTextOptions {
            heading_style: HeadingStyle::Plain,
            list_marker: "*".to_string(),
            table_cell_separator: " | ".to_string(),
            ..MinimalTextOptions::default()
        },
        ..CleanOptions::default()
    };
    let html = "<h3>Shopping</h3><ol><li>Flour</li></ol><table><tr><th>Qty</th><th>Item</th></tr></table>";
    let result = clean_html(html, &options);
    assert_eq!(result.output, "Shopping\n\n* Flour\n\nQty | Item");
}

#[test]
fn render_directly_from_document() {
    let doc = parse("<body><h2>Method</h2>Loose text<p>Para</p></body>");
    let text = render_minimal_text(&doc, &MinimalTextOptions::default());
    assert_eq!(text, "## Method\n\nLoose text\n\nPara");
}
