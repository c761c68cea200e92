//! End-to-end selection tests against real-world shaped HTML.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use html_query_selector::{HtmlParseOptions, QuerySelector, SelectError};

const SPANS: &str = r#"<div><span id="a">x</span><span class="b">y</span></div>"#;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Catalog</title>
  <meta name="description" content="books">
</head>
<body>
  <nav id="menu">
    <a href="/">Home</a>
    <a href="/books" class="active">Books</a>
    <a>Disabled</a>
  </nav>
  <main>
    <article class="book" data-id="1"><h2>Dune</h2><p class="price">9.99</p></article>
    <article class="book" data-id="2"><h2>Emma</h2><p class="price">4.50</p></article>
    <article class="ad"><p>Buy now</p></article>
    <section>
      <article class="book" data-id="3"><h2>Ulysses</h2></article>
    </section>
  </main>
</body>
</html>"#;

// ---------------------------------------------------------------------------
// Basic selection
// ---------------------------------------------------------------------------

#[test]
fn test_attribute_presence_narrows_selection() {
    let mut sel = QuerySelector::new(SPANS).unwrap();
    assert_eq!(sel.select_tag("span", true).has_attribute("id").length(), 1);
    assert_eq!(sel.select_tag("span", true).length(), 2);
}

#[test]
fn test_first_span_is_selected() {
    let mut sel = QuerySelector::new(SPANS).unwrap();
    let spans = sel.tag("span").attribute("id", None).select().unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans.first().unwrap().text(), "x");
}

#[test]
fn test_to_query_matches_select() {
    let chain = |sel: &mut QuerySelector| {
        sel.tag("nav")
            .attribute("id", "menu")
            .child_tag("a")
            .has_attribute("href")
            .or_attribute("class", "active");
    };

    let mut a = QuerySelector::new(PAGE).unwrap();
    chain(&mut a);
    let query = a.to_query();

    let mut b = QuerySelector::new(PAGE).unwrap();
    chain(&mut b);
    let selection = b.select().unwrap();

    assert_eq!(query, "//nav[@id='menu']/a[@href or @class='active']");
    assert_eq!(selection.query(), query);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_child_axis_excludes_nested() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    assert_eq!(sel.tag("main").tag("article").length(), 4);
    assert_eq!(sel.tag("main").child_tag("article").length(), 3);
}

#[test]
fn test_value_and_presence_combined() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    let books = sel
        .tag("article")
        .attribute("class", "book")
        .has_attribute("data-id")
        .select()
        .unwrap();
    let ids: Vec<&str> = books.iter().filter_map(|b| b.attribute("data-id")).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_repeated_tag_nests() {
    let html = "<div><div><p>inner</p></div></div><div><p>outer</p></div>";
    let mut sel = QuerySelector::new(html).unwrap();
    assert_eq!(sel.tag("div").tag("div").to_query(), "//div//div");
    let ps = sel.tag("div").tag("div").tag("p").select().unwrap();
    assert_eq!(ps.len(), 1);
    assert_eq!(ps.first().unwrap().text(), "inner");
}

#[test]
fn test_attribute_without_tag_matches_any_element() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    assert_eq!(sel.attribute("class", "price").length(), 2);
    let root = sel.has_attribute("lang").select().unwrap();
    assert_eq!(root.first().unwrap().name(), Some("html"));
}

#[test]
fn test_select_all_tags_inside_scope() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    sel.tag("nav");
    sel.select_all_tags();
    assert_eq!(sel.length(), 3);
}

// ---------------------------------------------------------------------------
// Reset and failure outcomes
// ---------------------------------------------------------------------------

#[test]
fn test_terminal_calls_are_destructive() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    sel.tag("a");
    assert_eq!(sel.to_query(), "//a");
    assert_eq!(sel.to_query(), "");

    sel.tag("a");
    assert_eq!(sel.length(), 3);
    assert_eq!(sel.length(), 0);
}

#[test]
fn test_empty_session_select() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    assert_eq!(sel.select().unwrap_err(), SelectError::EmptyQuery);
}

#[test]
fn test_unescaped_quote_fails_to_compile() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    let err = sel.tag("a").attribute("title", "it's").select().unwrap_err();
    match err {
        SelectError::Compile { query, .. } => assert_eq!(query, "//a[@title='it's']"),
        other => panic!("expected compile error, got {other:?}"),
    }
    // The failed call still reset the builder.
    assert!(sel.query_builder().is_empty());
    assert_eq!(sel.tag("a").length(), 3);
}

#[test]
fn test_no_match_is_empty_selection() {
    let mut sel = QuerySelector::new(PAGE).unwrap();
    let none = sel.tag("table").select().unwrap();
    assert!(none.is_empty());
    assert!(none.first().is_none());
}

// ---------------------------------------------------------------------------
// Malformed markup
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_markup_is_tolerated() {
    let html = "<div class=x><p>one<p>two</span><b>bold</b></div><<>";
    let mut sel = QuerySelector::new(html).unwrap();
    assert!(!sel.diagnostics().is_empty());
    assert_eq!(sel.tag("div").attribute("class", "x").child_tag("p").length(), 2);
    assert_eq!(sel.tag("b").length(), 1);
}

#[test]
fn test_empty_input() {
    let mut sel = QuerySelector::new("").unwrap();
    assert_eq!(sel.tag("body").length(), 1);
    assert_eq!(sel.tag("p").length(), 0);
}

#[test]
fn test_options_are_applied() {
    let opts = HtmlParseOptions::default().no_warnings(true).keep_comments(false);
    let sel = QuerySelector::with_options("<div><span>x", &opts).unwrap();
    assert!(sel.diagnostics().is_empty());
}
