//! Selecting elements from an HTML page.
//!
//! Run with: `cargo run --example select_links`
#![allow(clippy::expect_used)]

use html_query_selector::QuerySelector;

fn main() {
    let html = r#"<!DOCTYPE html>
<html>
<body>
  <nav id="menu">
    <a href="/">Home</a>
    <a href="/blog" class="active">Blog</a>
    <a>Coming soon</a>
  </nav>
  <div class="post">
    <p>Read the <a href="/docs" rel="nofollow">docs</a>.
    <p>Unclosed paragraphs are fine.
  </div>
</body>
</html>"#;

    let mut selector = QuerySelector::new(html).expect("failed to load HTML");
    println!("Parser recovered from {} issue(s)", selector.diagnostics().len());

    // Every link with a target
    println!("\nLinks:");
    let links = selector
        .tag("a")
        .has_attribute("href")
        .select()
        .expect("query failed");
    for link in links.iter() {
        println!(
            "  - {} -> {}",
            link.text(),
            link.attribute("href").unwrap_or_default()
        );
    }

    // Only the menu's direct children, either active or linking home
    let query = selector
        .tag("nav")
        .attribute("id", "menu")
        .child_tag("a")
        .attribute("class", "active")
        .or_attribute("href", "/")
        .to_query();
    println!("\nGenerated query: {query}");

    let count = selector
        .tag("nav")
        .attribute("id", "menu")
        .child_tag("a")
        .attribute("class", "active")
        .or_attribute("href", "/")
        .length();
    println!("Matches: {count}");

    // Any element carrying a rel attribute
    let count = selector.has_attribute("rel").length();
    println!("\nElements with rel: {count}");

    // Paragraphs inside the post
    let count = selector
        .tag("div")
        .attribute("class", "post")
        .child_tag("p")
        .length();
    println!("Paragraphs in post: {count}");
}
