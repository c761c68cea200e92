//! Fluent construction of `XPath` queries from tag and attribute selections.
//!
//! A [`QueryBuilder`] accumulates one query at a time. Tag calls append a
//! location step, attribute calls add a condition to the predicate of the most
//! recent step, and [`QueryBuilder::build_query`] serializes everything and
//! clears the builder so it can be reused for an unrelated query.
//!
//! # Examples
//!
//! ```
//! use html_query_selector::query::QueryBuilder;
//!
//! let mut builder = QueryBuilder::new();
//! builder
//!     .tag("div")
//!     .attribute("id", "main")
//!     .or_has_attribute("data-main")
//!     .child_tag("a");
//! assert_eq!(builder.build_query(), "//div[@id='main' or @data-main]/a");
//!
//! // The builder is empty again.
//! assert_eq!(builder.build_query(), "");
//! ```
//!
//! # Submodules
//!
//! - [`path`]: the typed query representation and its serialization.

pub mod path;

pub use path::{AttributeCondition, Axis, Join, NodeTest, QueryPath, TagSelection};

/// Separator between a tag name and its occurrence index in selection keys
/// (`div`, `div.1`, `div.2`, ...).
pub const KEY_SEPARATOR: char = '.';

/// Whether the builder currently holds a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderState {
    /// No current selection; the next attribute call targets an implicit `*`.
    Empty,
    /// At least one selection has been made since the last reset.
    Accumulating,
}

/// The state of one query under construction.
#[derive(Debug, Clone, Default)]
struct Session {
    path: QueryPath,
    /// Index into `path.selections` of the target of attribute calls.
    current: Option<usize>,
}

impl Session {
    fn contains_key(&self, key: &str) -> bool {
        self.path.selections.iter().any(|sel| sel.key == key)
    }

    fn push(&mut self, selection: TagSelection) {
        self.path.selections.push(selection);
        self.current = Some(self.path.selections.len() - 1);
    }
}

/// Accumulates tag and attribute selections and turns them into an `XPath`
/// expression.
///
/// Chainable methods return `&mut Self`. The builder is single-use per query:
/// [`build_query`](Self::build_query) always leaves it empty.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    session: Session,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects elements named `name`.
    ///
    /// With `recursive` set, the element may appear anywhere below the
    /// previous selection (`//name`); otherwise it must be a direct child
    /// (`/name`). Any string is accepted as a tag name.
    ///
    /// Selecting the same name twice keeps two distinct selections: the
    /// second is keyed `name.<count>` but still emits `name`.
    pub fn select_tag(&mut self, name: &str, recursive: bool) -> &mut Self {
        self.select_tag_with_axis(name, Axis::from_recursive(recursive))
    }

    /// Selects elements named `name` along an explicit axis.
    pub fn select_tag_with_axis(&mut self, name: &str, axis: Axis) -> &mut Self {
        let key = if self.session.contains_key(name) {
            format!("{name}{KEY_SEPARATOR}{}", self.session.path.selections.len())
        } else {
            name.to_string()
        };
        self.session
            .push(TagSelection::new(key, NodeTest::Named(name.to_string()), axis));
        self
    }

    /// Shorthand for `select_tag(name, true)`.
    pub fn tag(&mut self, name: &str) -> &mut Self {
        self.select_tag_with_axis(name, Axis::Descendant)
    }

    /// Shorthand for `select_tag(name, false)`.
    pub fn child_tag(&mut self, name: &str) -> &mut Self {
        self.select_tag_with_axis(name, Axis::Child)
    }

    /// Selects any element (`//*`) and makes it the current selection.
    pub fn select_all_tags(&mut self) {
        let key = format!("*{KEY_SEPARATOR}{}", self.session.path.selections.len());
        self.session
            .push(TagSelection::new(key, NodeTest::Any, Axis::Descendant));
    }

    /// Adds a condition joined with `and` to the current selection.
    ///
    /// Pass `None` to test for the attribute's presence, or a value to test
    /// for equality. Without a prior tag call, an implicit `//*` selection is
    /// created first.
    ///
    /// The value is embedded between single quotes as-is; a value that
    /// contains `'` produces an expression the engine will reject.
    pub fn attribute<'v>(&mut self, name: &str, value: impl Into<Option<&'v str>>) -> &mut Self {
        let value = value.into().map(str::to_string);
        self.push_condition(AttributeCondition::and(name, value))
    }

    /// Adds a condition joined with `or` to the current selection.
    ///
    /// Behaves like [`attribute`](Self::attribute) otherwise.
    pub fn or_attribute<'v>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        let value = value.into().map(str::to_string);
        self.push_condition(AttributeCondition::or(name, value))
    }

    /// Shorthand for `attribute(name, None)`.
    pub fn has_attribute(&mut self, name: &str) -> &mut Self {
        self.attribute(name, None)
    }

    /// Shorthand for `or_attribute(name, None)`.
    pub fn or_has_attribute(&mut self, name: &str) -> &mut Self {
        self.or_attribute(name, None)
    }

    fn push_condition(&mut self, condition: AttributeCondition) -> &mut Self {
        let index = match self.session.current {
            Some(index) => index,
            None => {
                self.select_all_tags();
                self.session.path.selections.len() - 1
            }
        };
        self.session.path.selections[index].conditions.push(condition);
        self
    }

    /// Serializes the accumulated selections and resets the builder.
    ///
    /// An empty builder produces an empty string. Calling this twice in a
    /// row therefore returns `""` the second time.
    pub fn build_query(&mut self) -> String {
        let session = std::mem::take(&mut self.session);
        let query = session.path.to_string();
        log::debug!(
            "built query {query:?} from {} selection(s)",
            session.path.selections.len()
        );
        query
    }

    /// Serializes the accumulated selections without resetting.
    #[must_use]
    pub fn peek_query(&self) -> String {
        self.session.path.to_string()
    }

    /// Discards every selection and condition.
    pub fn reset(&mut self) {
        self.session = Session::default();
    }

    /// Returns the current builder state.
    #[must_use]
    pub fn state(&self) -> BuilderState {
        if self.session.current.is_some() {
            BuilderState::Accumulating
        } else {
            BuilderState::Empty
        }
    }

    /// Returns `true` if no selection has been made since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.path.is_empty()
    }

    /// Returns the number of selections made since the last reset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.session.path.selections.len()
    }

    /// Returns the selections made since the last reset, in order.
    #[must_use]
    pub fn selections(&self) -> &[TagSelection] {
        &self.session.path.selections
    }

    /// Returns the selection attribute calls currently apply to.
    #[must_use]
    pub fn current(&self) -> Option<&TagSelection> {
        self.session
            .current
            .and_then(|index| self.session.path.selections.get(index))
    }
}
