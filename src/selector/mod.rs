//! Fluent element selection over a parsed HTML document.
//!
//! [`QuerySelector`] pairs a [`QueryBuilder`] with an [`HtmlDocument`].
//! Tag and attribute calls are forwarded to the builder; the terminal calls
//! [`select`](QuerySelector::select), [`length`](QuerySelector::length) and
//! [`to_query`](QuerySelector::to_query) build the query, which resets the
//! builder, and then evaluate or return it.
//!
//! # Examples
//!
//! ```
//! use html_query_selector::QuerySelector;
//!
//! let html = r#"<div><span id="a">x</span><span class="b">y</span></div>"#;
//! let mut selector = QuerySelector::new(html).unwrap();
//!
//! assert_eq!(selector.tag("span").has_attribute("id").length(), 1);
//! assert_eq!(selector.tag("span").length(), 2);
//!
//! let spans = selector.tag("span").attribute("class", "b").select().unwrap();
//! assert_eq!(spans.first().map(|s| s.text()), Some("y".to_string()));
//! ```

use xot::Xot;

use crate::error::{ParseDiagnostic, SelectError};
use crate::html::{HtmlDocument, HtmlParseOptions};
use crate::query::{Axis, QueryBuilder};

/// Builds queries fluently and runs them against one HTML document.
#[derive(Debug)]
pub struct QuerySelector {
    document: HtmlDocument,
    builder: QueryBuilder,
}

impl QuerySelector {
    /// Parses `html` with default options.
    ///
    /// Malformed markup is recovered from, never rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Document`] only if the `XPath` engine cannot
    /// host the parsed tree.
    pub fn new(html: &str) -> Result<Self, SelectError> {
        Self::with_options(html, &HtmlParseOptions::default())
    }

    /// Parses `html` with the given options.
    ///
    /// # Errors
    ///
    /// See [`QuerySelector::new`].
    pub fn with_options(html: &str, options: &HtmlParseOptions) -> Result<Self, SelectError> {
        Ok(Self::from_document(HtmlDocument::parse_with_options(
            html, options,
        )?))
    }

    /// Wraps an already parsed document.
    #[must_use]
    pub fn from_document(document: HtmlDocument) -> Self {
        Self {
            document,
            builder: QueryBuilder::new(),
        }
    }

    /// See [`QueryBuilder::select_tag`].
    pub fn select_tag(&mut self, name: &str, recursive: bool) -> &mut Self {
        self.builder.select_tag(name, recursive);
        self
    }

    /// See [`QueryBuilder::select_tag_with_axis`].
    pub fn select_tag_with_axis(&mut self, name: &str, axis: Axis) -> &mut Self {
        self.builder.select_tag_with_axis(name, axis);
        self
    }

    /// See [`QueryBuilder::tag`].
    pub fn tag(&mut self, name: &str) -> &mut Self {
        self.builder.tag(name);
        self
    }

    /// See [`QueryBuilder::child_tag`].
    pub fn child_tag(&mut self, name: &str) -> &mut Self {
        self.builder.child_tag(name);
        self
    }

    /// See [`QueryBuilder::select_all_tags`].
    pub fn select_all_tags(&mut self) {
        self.builder.select_all_tags();
    }

    /// See [`QueryBuilder::attribute`].
    pub fn attribute<'v>(&mut self, name: &str, value: impl Into<Option<&'v str>>) -> &mut Self {
        self.builder.attribute(name, value);
        self
    }

    /// See [`QueryBuilder::or_attribute`].
    pub fn or_attribute<'v>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        self.builder.or_attribute(name, value);
        self
    }

    /// See [`QueryBuilder::has_attribute`].
    pub fn has_attribute(&mut self, name: &str) -> &mut Self {
        self.builder.has_attribute(name);
        self
    }

    /// See [`QueryBuilder::or_has_attribute`].
    pub fn or_has_attribute(&mut self, name: &str) -> &mut Self {
        self.builder.or_has_attribute(name);
        self
    }

    /// Builds the query, resetting the builder, and evaluates it.
    ///
    /// # Errors
    ///
    /// - [`SelectError::EmptyQuery`] if nothing was selected.
    /// - [`SelectError::Compile`] if the engine rejects the query, for
    ///   instance because an attribute value contains `'`.
    /// - [`SelectError::Evaluation`] if evaluation fails.
    ///
    /// These mean "no usable result" rather than a broken selector: the
    /// selector stays usable for the next query.
    pub fn select(&mut self) -> Result<Selection<'_>, SelectError> {
        let query = self.builder.build_query();
        match self.document.evaluate(&query) {
            Ok(nodes) => Ok(Selection {
                xot: self.document.xot(),
                query,
                nodes,
            }),
            Err(err) => {
                log::debug!("selection failed: {err}");
                Err(err)
            }
        }
    }

    /// Builds and evaluates the query, returning the number of matches.
    ///
    /// Returns `0` when [`select`](Self::select) fails.
    pub fn length(&mut self) -> usize {
        self.select().as_ref().map_or(0, Selection::len)
    }

    /// Builds the query, resetting the builder, without evaluating it.
    pub fn to_query(&mut self) -> String {
        self.builder.build_query()
    }

    /// Returns the embedded builder.
    #[must_use]
    pub fn query_builder(&self) -> &QueryBuilder {
        &self.builder
    }

    /// Returns the embedded builder mutably.
    pub fn query_builder_mut(&mut self) -> &mut QueryBuilder {
        &mut self.builder
    }

    /// Returns the parsed document.
    #[must_use]
    pub fn document(&self) -> &HtmlDocument {
        &self.document
    }

    /// Returns the diagnostics the HTML parser recovered from.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        self.document.diagnostics()
    }
}

/// The nodes matched by one query, in document order.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    xot: &'a Xot,
    query: String,
    nodes: Vec<xot::Node>,
}

impl<'a> Selection<'a> {
    /// Returns the query that produced this selection.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the number of matched nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SelectedElement<'a>> {
        self.nodes.get(index).map(|&node| SelectedElement {
            xot: self.xot,
            node,
        })
    }

    /// Returns the first matched node.
    #[must_use]
    pub fn first(&self) -> Option<SelectedElement<'a>> {
        self.get(0)
    }

    /// Iterates over the matched nodes.
    pub fn iter(&self) -> impl Iterator<Item = SelectedElement<'a>> + '_ {
        let xot = self.xot;
        self.nodes
            .iter()
            .map(move |&node| SelectedElement { xot, node })
    }

    /// Returns the raw `xot` nodes.
    #[must_use]
    pub fn nodes(&self) -> &[xot::Node] {
        &self.nodes
    }
}

/// A matched node.
#[derive(Debug, Clone, Copy)]
pub struct SelectedElement<'a> {
    xot: &'a Xot,
    node: xot::Node,
}

impl<'a> SelectedElement<'a> {
    /// Returns the element's tag name, or `None` for non-element nodes.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        let xot = self.xot;
        xot.element(self.node)
            .map(|element| xot.local_name_str(element.name()))
    }

    /// Returns the value of the attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let xot = self.xot;
        let name = xot.name(name)?;
        xot.get_attribute(self.node, name)
    }

    /// Returns every attribute as `(name, value)` pairs, in source order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        if !self.xot.is_element(self.node) {
            return Vec::new();
        }
        self.xot
            .attributes(self.node)
            .to_vec()
            .into_iter()
            .map(|(name, value)| (self.xot.local_name_str(name).to_string(), value))
            .collect()
    }

    /// Returns the concatenated text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.xot.string_value(self.node)
    }

    /// Returns the underlying node.
    #[must_use]
    pub fn node(&self) -> xot::Node {
        self.node
    }
}
