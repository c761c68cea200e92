//! # html-query-selector
//!
//! Select elements from HTML documents with a fluent tag/attribute API.
//! Each chain of calls is translated into a single `XPath` expression and
//! evaluated by an external engine.
//!
//! ## Quick Start
//!
//! ```
//! use html_query_selector::QuerySelector;
//!
//! let mut selector = QuerySelector::new(
//!     r#"<ul id="nav"><li><a href="/">Home</a></li><li><a>Blog</a></li></ul>"#,
//! ).unwrap();
//!
//! let links = selector
//!     .tag("ul").attribute("id", "nav")
//!     .tag("a").has_attribute("href")
//!     .select()
//!     .unwrap();
//! assert_eq!(links.query(), "//ul[@id='nav']//a[@href]");
//! assert_eq!(links.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`query`]: the query builder and its typed representation. Usable on
//!   its own, with no document involved.
//! - [`html`]: error-tolerant HTML loading and `XPath` evaluation.
//! - [`selector`]: the fluent facade tying both together.
//! - [`error`]: error and diagnostic types.

pub mod error;
pub mod html;
pub mod query;
pub mod selector;

// Re-export primary types at the crate root for convenience.
pub use error::{ParseDiagnostic, SelectError};
pub use html::{HtmlDocument, HtmlParseOptions};
pub use query::{Axis, QueryBuilder};
pub use selector::{QuerySelector, SelectedElement, Selection};
