//! Error-tolerant HTML loading for `XPath` evaluation.
//!
//! HTML is parsed with [`scraper`] (html5ever), which recovers from
//! malformed markup the way browsers do:
//!
//! - Missing closing tags are closed implicitly
//! - Implied `html`, `head` and `body` elements are inserted
//! - Unquoted and valueless attributes are accepted
//! - Stray end tags are dropped
//! - `<template>` content is kept as ordinary children of the `template`
//!   element
//!
//! The resulting tree is mirrored into the `xot` arena of an
//! [`xee_xpath::Documents`] store so the generated queries can be evaluated
//! by `xee-xpath`. Element and attribute names are added without a namespace,
//! so `//div` matches HTML `div` elements.
//!
//! # Examples
//!
//! ```
//! use html_query_selector::html::HtmlDocument;
//!
//! let mut doc = HtmlDocument::parse("<p>Hello <b>world</b>").unwrap();
//! let nodes = doc.evaluate("//b").unwrap();
//! assert_eq!(nodes.len(), 1);
//! ```

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};
use xee_xpath::{DocumentHandle, Documents, Queries, Query};
use xot::Xot;

use crate::error::{ParseDiagnostic, SelectError};

/// Options controlling how parsed HTML is loaded.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use html_query_selector::html::HtmlParseOptions;
///
/// let opts = HtmlParseOptions::default()
///     .no_blanks(true)
///     .keep_comments(false);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct HtmlParseOptions {
    /// If true, whitespace-only text nodes are dropped.
    pub no_blanks: bool,
    /// If true, comment nodes are kept in the tree.
    pub keep_comments: bool,
    /// If true, parser diagnostics are not recorded.
    pub no_warnings: bool,
}

impl Default for HtmlParseOptions {
    fn default() -> Self {
        Self {
            no_blanks: false,
            keep_comments: true,
            no_warnings: false,
        }
    }
}

impl HtmlParseOptions {
    /// Enables or disables stripping of blank text nodes.
    #[must_use]
    pub fn no_blanks(mut self, yes: bool) -> Self {
        self.no_blanks = yes;
        self
    }

    /// Enables or disables keeping comment nodes.
    #[must_use]
    pub fn keep_comments(mut self, yes: bool) -> Self {
        self.keep_comments = yes;
        self
    }

    /// Enables or disables recording of parser diagnostics.
    #[must_use]
    pub fn no_warnings(mut self, yes: bool) -> Self {
        self.no_warnings = yes;
        self
    }
}

/// A parsed HTML document bound to an `XPath` engine.
///
/// The document is read-only after construction; evaluating a query needs
/// `&mut self` only because the engine caches state in its document store.
#[derive(Debug)]
pub struct HtmlDocument {
    documents: Documents,
    handle: DocumentHandle,
    diagnostics: Vec<ParseDiagnostic>,
    element_count: usize,
}

impl HtmlDocument {
    /// Parses an HTML string with default options.
    ///
    /// # Errors
    ///
    /// Malformed markup never fails. Returns [`SelectError::Document`] only if
    /// the engine refuses to host the tree.
    pub fn parse(input: &str) -> Result<Self, SelectError> {
        Self::parse_with_options(input, &HtmlParseOptions::default())
    }

    /// Parses an HTML string with the given options.
    ///
    /// # Errors
    ///
    /// See [`HtmlDocument::parse`].
    pub fn parse_with_options(
        input: &str,
        options: &HtmlParseOptions,
    ) -> Result<Self, SelectError> {
        let html = Html::parse_document(input);

        let diagnostics: Vec<ParseDiagnostic> = if options.no_warnings {
            Vec::new()
        } else {
            html.errors
                .iter()
                .map(|message| ParseDiagnostic {
                    message: message.to_string(),
                })
                .collect()
        };

        // The engine only registers documents it parsed itself, so load an
        // empty shell and graft the HTML tree onto its document element.
        let mut documents = Documents::new();
        let handle = documents
            .add_string_without_uri("<html/>")
            .map_err(document_error)?;
        let doc_node = documents
            .document_node(handle)
            .ok_or_else(|| SelectError::Document {
                message: "document handle has no document node".to_string(),
            })?;
        let xot = documents.xot_mut();
        let root = xot.document_element(doc_node).map_err(document_error)?;
        let element_count = mirror_tree(xot, html.root_element(), root, options);

        log::debug!(
            "loaded HTML document: {} bytes, {element_count} elements, {} diagnostics",
            input.len(),
            diagnostics.len()
        );

        Ok(Self {
            documents,
            handle,
            diagnostics,
            element_count,
        })
    }

    /// Evaluates an `XPath` expression against the document node and returns
    /// the matched nodes in document order.
    ///
    /// # Errors
    ///
    /// - [`SelectError::EmptyQuery`] if `query` is empty.
    /// - [`SelectError::Compile`] if the engine rejects the expression.
    /// - [`SelectError::Evaluation`] if evaluation fails or yields non-nodes.
    pub fn evaluate(&mut self, query: &str) -> Result<Vec<xot::Node>, SelectError> {
        if query.is_empty() {
            return Err(SelectError::EmptyQuery);
        }
        let queries = Queries::default();
        let compiled = queries
            .sequence(query)
            .map_err(|err| SelectError::Compile {
                query: query.to_string(),
                message: err.to_string(),
            })?;
        let sequence = compiled
            .execute(&mut self.documents, self.handle)
            .map_err(|err| evaluation_error(query, &err))?;
        sequence
            .nodes()
            .map(|node| node.map_err(|err| evaluation_error(query, &err)))
            .collect()
    }

    /// Returns the arena holding the document tree.
    #[must_use]
    pub fn xot(&self) -> &Xot {
        self.documents.xot()
    }

    /// Returns the diagnostics the parser recovered from.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// Returns the number of elements in the document, including the root.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_count
    }
}

fn document_error(err: impl std::fmt::Display) -> SelectError {
    SelectError::Document {
        message: err.to_string(),
    }
}

fn evaluation_error(query: &str, err: &impl std::fmt::Display) -> SelectError {
    SelectError::Evaluation {
        query: query.to_string(),
        message: err.to_string(),
    }
}

/// Copies the attributes and content of `source` onto `target`, recursively.
///
/// Returns the number of elements copied, `source` included. Walks with an
/// explicit stack so deeply nested markup cannot overflow the call stack.
fn mirror_tree(
    xot: &mut Xot,
    source: ElementRef<'_>,
    target: xot::Node,
    options: &HtmlParseOptions,
) -> usize {
    let mut count = 0;
    let mut stack = vec![(source, target)];

    while let Some((element, parent)) = stack.pop() {
        count += 1;
        for (name, value) in element.value().attrs() {
            let name = xot.add_name(name);
            xot.set_attribute(parent, name, value);
        }

        for child in content_children(*element) {
            let node = match child.value() {
                Node::Element(el) => {
                    let Some(child_element) = ElementRef::wrap(child) else {
                        continue;
                    };
                    let name = xot.add_name(el.name());
                    let node = xot.new_element(name);
                    stack.push((child_element, node));
                    node
                }
                Node::Text(text) => {
                    if options.no_blanks && text.trim().is_empty() {
                        continue;
                    }
                    xot.new_text(text)
                }
                Node::Comment(comment) if options.keep_comments => {
                    xot.new_comment(&comment.comment)
                }
                _ => continue,
            };
            if let Err(err) = xot.append(parent, node) {
                log::warn!("dropping node that cannot be attached to the tree: {err}");
            }
        }
    }
    count
}

/// Returns the children of `node`, with document fragments replaced by their
/// own children.
///
/// html5ever keeps `<template>` content in a fragment hanging off the
/// element; the engine tree has no fragments, so the content is attached to
/// the element directly.
fn content_children(node: NodeRef<'_, Node>) -> Vec<NodeRef<'_, Node>> {
    let mut children = Vec::new();
    let mut pending: Vec<_> = node.children().rev().collect();
    while let Some(child) = pending.pop() {
        if child.value().is_fragment() {
            pending.extend(child.children().rev());
        } else {
            children.push(child);
        }
    }
    children
}
