//! End-to-end rewrite behavior over a realistic page.

use wordswap::{rewrite, Rule};

const YALE_PAGE: &str = include_str!("fixtures/yale.html");

fn yale_rule() -> Rule {
    Rule::new("yale", "fale")
}

#[test]
fn replaces_visible_text_throughout_the_page() {
    let result = rewrite(YALE_PAGE, &yale_rule());

    assert!(result.changed);
    assert!(result.html.contains("Fale University Test Page"));
    assert!(result.html.contains("Welcome to Fale University"));
    assert!(result.html.contains("Fale University is a private Ivy League"));
    assert!(result.html.contains("Fale was founded in 1701"));
    assert!(result.html.contains(">About Fale<"));
    assert!(result.html.contains(">Fale Admissions<"));
}

#[test]
fn urls_and_attributes_remain_byte_identical() {
    let result = rewrite(YALE_PAGE, &yale_rule());

    assert!(result.html.contains(r#"href="https://www.yale.edu/about""#));
    assert!(result.html.contains(r#"href="https://www.yale.edu/admissions""#));
    assert!(result.html.contains(r#"src="https://www.yale.edu/images/logo.png""#));
    assert!(result.html.contains(r#"alt="Yale Logo""#));
}

#[test]
fn url_shaped_tokens_in_visible_text_are_skipped() {
    let result = rewrite(YALE_PAGE, &yale_rule());

    assert!(result.html.contains("mailto:info@yale.edu"));
    assert!(result.html.contains("https://www.yale.edu/contact"));
}

#[test]
fn all_three_case_classes_preserved() {
    let result = rewrite(YALE_PAGE, &yale_rule());

    assert!(result
        .html
        .contains("FALE University, Fale College, and fale medical school"));
}

#[test]
fn title_is_always_covered() {
    let result = rewrite(
        "<html><head><title>Yale University Test Page</title></head><body></body></html>",
        &yale_rule(),
    );
    assert!(result.changed);
    assert!(result.html.contains("<title>Fale University Test Page</title>"));

    let result = rewrite(
        "<html><head><title>Test Page</title></head><body></body></html>",
        &yale_rule(),
    );
    assert!(!result.changed);
    assert!(result.html.contains("<title>Test Page</title>"));
}

#[test]
fn no_occurrences_leaves_page_unchanged() {
    let page = "<!DOCTYPE html>\
        <html><head><title>Test Page</title></head>\
        <body><h1>Hello World</h1>\
        <p>This is a test page with no university references.</p>\
        </body></html>";

    let result = rewrite(page, &yale_rule());

    assert!(!result.changed);
    assert!(result.html.contains("<title>Test Page</title>"));
    assert!(result.html.contains("<h1>Hello World</h1>"));
    assert!(result
        .html
        .contains("<p>This is a test page with no university references.</p>"));
}

#[test]
fn rewriting_is_idempotent() {
    let first = rewrite(YALE_PAGE, &yale_rule());
    let second = rewrite(&first.html, &yale_rule());

    assert!(!second.changed);
    assert_eq!(first.html, second.html);
}

#[test]
fn comments_are_not_rewritten() {
    let result = rewrite(YALE_PAGE, &yale_rule());

    assert!(result.html.contains("<!-- Yale footer comment -->"));
}

#[test]
fn round_trip_without_matches_is_structurally_stable() {
    let page = r#"<!DOCTYPE html><html><head><title>Plain</title></head><body><div class="a" id="b"><p>text</p></div></body></html>"#;

    let result = rewrite(page, &Rule::new("absent", "word"));

    assert!(!result.changed);
    assert!(result.html.contains(r#"<div class="a" id="b"><p>text</p></div>"#));
    assert!(result.html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn custom_rules_work() {
    let result = rewrite("<p>The CAT sat. A cat. Cats everywhere.</p>", &Rule::new("cat", "dog"));

    assert!(result.changed);
    assert!(result.html.contains("The DOG sat. A dog. Dogs everywhere."));
}
