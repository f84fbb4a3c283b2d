use rs_page_cleaner::{clean_html, parse, remove_consent_ui, CleanOptions};

const PAGE: &str = r#"
<html><body>
  <div id="onetrust-consent-sdk">
    <div id="onetrust-banner-sdk"><p>We value your privacy</p><button>Accept All</button></div>
  </div>
  <div class="fc-consent-root"><p>Manage options</p></div>
  <div class="gdpr-notice"><p>This site uses cookies. Manage your preferences for vendors and purposes.</p></div>
  <div class="page-overlay"></div>
  <h1>Oatmeal Cookies</h1>
  <div class="cookie-recipe"><p>Chewy oatmeal cookies with raisins.</p></div>
</body></html>"#;

#[test]
fn consent_ui_is_removed_before_reduction() {
    let result = clean_html(PAGE, &CleanOptions::default());
    assert_eq!(
        result.output,
        "<h1>Oatmeal Cookies</h1><p>Chewy oatmeal cookies with raisins.</p>"
    );
    // Vendor root, fc-consent-root, gdpr-notice, overlay.
    assert_eq!(result.stats.removed_nodes, 4);
}

#[test]
fn consent_heuristics_can_be_disabled() {
    let result = clean_html(
        PAGE,
        &CleanOptions {
            apply_consent_ui_heuristics: false,
            ..CleanOptions::default()
        },
    );
    assert!(result.output.contains("We value your privacy"));
    assert!(result.output.contains("vendors and purposes"));
    // Only the banner's button, via noise removal.
    assert_eq!(result.stats.removed_nodes, 1);
}

#[test]
fn recipe_about_cookies_is_not_a_banner() {
    let doc = parse(
        r#"<body><div class="cookie-recipe"><h2>Cookie dough</h2><p>Cream the butter, then accept that it takes time.</p></div></body>"#,
    );
    assert_eq!(remove_consent_ui(&doc), 0);
    assert!(doc.select(".cookie-recipe").exists());
}

#[test]
fn high_scoring_modal_is_removed() {
    let doc = parse(
        r#"<body><div aria-modal="true"><p>Cookie settings</p><p>Consent to vendors under IAB TCF.</p></div><p>Body</p></body>"#,
    );
    assert_eq!(remove_consent_ui(&doc), 1);
    assert!(doc.select("[aria-modal]").is_empty());
}

#[test]
fn document_without_candidates_is_untouched() {
    let doc = parse("<body><h1>Soup</h1><p>Simmer.</p></body>");
    assert_eq!(remove_consent_ui(&doc), 0);
    assert_eq!(doc.select("body").inner_html().to_string(), "<h1>Soup</h1><p>Simmer.</p>");
}
