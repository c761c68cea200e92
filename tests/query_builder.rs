//! Query construction tests.
//!
//! These exercise [`QueryBuilder`] on its own: the generated expression text,
//! key disambiguation, and the reset after every build.

#![allow(clippy::unwrap_used)]

use html_query_selector::query::{Axis, BuilderState, Join, NodeTest, QueryBuilder};

// ---------------------------------------------------------------------------
// Tag selection
// ---------------------------------------------------------------------------

#[test]
fn test_single_tag_defaults_to_descendant() {
    for name in ["div", "span", "my-widget", "svg:rect", ""] {
        let mut b = QueryBuilder::new();
        b.tag(name);
        assert_eq!(b.build_query(), format!("//{name}"));
    }
}

#[test]
fn test_single_tag_child_axis() {
    let mut b = QueryBuilder::new();
    b.select_tag("body", false);
    assert_eq!(b.build_query(), "/body");

    b.select_tag_with_axis("body", Axis::Child);
    assert_eq!(b.build_query(), "/body");
}

#[test]
fn test_nested_tags_concatenate() {
    let mut b = QueryBuilder::new();
    b.tag("div").tag("span");
    assert_eq!(b.build_query(), "//div//span");

    b.child_tag("html").child_tag("body").tag("p");
    assert_eq!(b.build_query(), "/html/body//p");
}

#[test]
fn test_same_tag_twice_stays_distinct() {
    let mut b = QueryBuilder::new();
    b.tag("div").tag("div");
    assert_eq!(b.len(), 2);
    assert_eq!(b.selections()[0].key, "div");
    assert_eq!(b.selections()[1].key, "div.1");
    for sel in b.selections() {
        assert_eq!(sel.node_test, NodeTest::Named("div".to_string()));
    }
    assert_eq!(b.build_query(), "//div//div");
}

#[test]
fn test_conditions_follow_their_own_selection() {
    let mut b = QueryBuilder::new();
    b.tag("div")
        .attribute("class", "outer")
        .tag("div")
        .attribute("class", "inner");
    assert_eq!(
        b.build_query(),
        "//div[@class='outer']//div[@class='inner']"
    );
}

// ---------------------------------------------------------------------------
// Attribute conditions
// ---------------------------------------------------------------------------

#[test]
fn test_attribute_without_tag() {
    let mut b = QueryBuilder::new();
    b.attribute("id", "x");
    assert_eq!(b.build_query(), "//*[@id='x']");
}

#[test]
fn test_or_attribute_without_tag() {
    let mut b = QueryBuilder::new();
    b.or_attribute("id", None);
    assert_eq!(b.build_query(), "//*[@id]");
}

#[test]
fn test_presence_test() {
    let mut b = QueryBuilder::new();
    b.tag("a").attribute("href", None);
    assert_eq!(b.build_query(), "//a[@href]");
}

#[test]
fn test_empty_and_zero_values_are_equality_tests() {
    let mut b = QueryBuilder::new();
    b.tag("input").attribute("value", "").or_attribute("value", "0");
    assert_eq!(b.build_query(), "//input[@value='' or @value='0']");
}

#[test]
fn test_or_shares_one_bracket() {
    let mut b = QueryBuilder::new();
    b.tag("p").has_attribute("a").or_has_attribute("b");
    assert_eq!(b.build_query(), "//p[@a or @b]");
}

#[test]
fn test_and_shares_one_bracket() {
    let mut b = QueryBuilder::new();
    b.tag("p").has_attribute("a").has_attribute("b");
    assert_eq!(b.build_query(), "//p[@a and @b]");
}

#[test]
fn test_joins_recorded_in_order() {
    let mut b = QueryBuilder::new();
    b.tag("p")
        .or_attribute("a", "1")
        .attribute("b", None)
        .or_attribute("c", "3");
    let joins: Vec<Join> = b.selections()[0]
        .conditions
        .iter()
        .map(|c| c.join)
        .collect();
    assert_eq!(joins, [Join::Or, Join::And, Join::Or]);
    // The first condition's operator is never emitted.
    assert_eq!(b.build_query(), "//p[@a='1' and @b or @c='3']");
}

#[test]
fn test_attribute_after_wildcard_selection() {
    let mut b = QueryBuilder::new();
    b.tag("form");
    b.select_all_tags();
    b.has_attribute("required");
    assert_eq!(b.build_query(), "//form//*[@required]");
}

#[test]
fn test_single_quote_in_value_is_not_escaped() {
    // Values are embedded verbatim; the resulting expression is malformed.
    let mut b = QueryBuilder::new();
    b.tag("a").attribute("title", "it's");
    assert_eq!(b.build_query(), "//a[@title='it's']");
}

// ---------------------------------------------------------------------------
// Reset protocol
// ---------------------------------------------------------------------------

#[test]
fn test_empty_builder_builds_empty_string() {
    let mut b = QueryBuilder::new();
    assert_eq!(b.state(), BuilderState::Empty);
    assert_eq!(b.build_query(), "");
}

#[test]
fn test_second_build_is_empty() {
    let mut b = QueryBuilder::new();
    b.tag("div").has_attribute("id");
    assert_eq!(b.build_query(), "//div[@id]");
    assert_eq!(b.build_query(), "");
}

#[test]
fn test_builder_reusable_for_unrelated_queries() {
    let mut b = QueryBuilder::new();
    b.tag("div").tag("div");
    assert_eq!(b.build_query(), "//div//div");

    b.tag("div");
    assert_eq!(b.selections()[0].key, "div");
    assert_eq!(b.build_query(), "//div");

    b.attribute("lang", "en");
    assert_eq!(b.build_query(), "//*[@lang='en']");
}
