//! Typed representation of a query under construction.
//!
//! A query is an ordered list of [`TagSelection`]s. Each selection carries an
//! [`Axis`], a [`NodeTest`], and the [`AttributeCondition`]s that end up in
//! its bracketed predicate. Serialization is a single `fmt::Display` pass over
//! [`QueryPath`]:
//!
//! ```text
//! //div[@id='main' or @class]/span
//! ^^ ^^^ ^^^^^^^^^^^^^^^^^^^^ ^ ^^^^
//! |  |   predicate            | node test
//! |  node test                axis (child)
//! axis (descendant)
//! ```

use std::fmt;

/// The axis a selection is matched along, relative to the previous selection
/// (or the document node for the first one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Matches anywhere in the subtree (`//`).
    #[default]
    Descendant,
    /// Matches direct children only (`/`).
    Child,
}

impl Axis {
    /// Maps the `recursive` flag of the fluent API onto an axis.
    #[must_use]
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive {
            Self::Descendant
        } else {
            Self::Child
        }
    }

    /// Returns the abbreviated step separator for this axis.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => "//",
            Self::Child => "/",
        }
    }
}

/// What a selection matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeTest {
    /// Elements with this exact tag name.
    Named(String),
    /// Any element (`*`).
    Any,
}

impl NodeTest {
    /// The text emitted for this test in the query.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Any => "*",
        }
    }
}

impl fmt::Display for NodeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a condition joins the condition before it in the same predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Join {
    /// `and`
    And,
    /// `or`
    Or,
}

impl Join {
    /// Returns the operator keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// A single `@name` or `@name='value'` test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCondition {
    /// The attribute name.
    pub name: String,
    /// The expected value. `None` tests for presence only.
    pub value: Option<String>,
    /// Operator placed before this condition. Not emitted for the first
    /// condition of a predicate.
    pub join: Join,
}

impl AttributeCondition {
    /// Creates a condition joined with `and`.
    pub fn and(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            join: Join::And,
        }
    }

    /// Creates a condition joined with `or`.
    pub fn or(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            join: Join::Or,
        }
    }
}

impl fmt::Display for AttributeCondition {
    /// Writes the test itself. The value is wrapped in single quotes and
    /// is not escaped, so a value containing `'` yields a malformed query.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "@{}='{value}'", self.name),
            None => write!(f, "@{}", self.name),
        }
    }
}

/// One location step of the query plus its predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    /// Identifier unique within one session (`div`, `div.1`, `*.0`, ...).
    pub key: String,
    /// The node test emitted in the query. Never derived from `key`.
    pub node_test: NodeTest,
    /// Step axis.
    pub axis: Axis,
    /// Conditions, in insertion order.
    pub conditions: Vec<AttributeCondition>,
}

impl TagSelection {
    /// Creates a selection with no conditions.
    pub fn new(key: impl Into<String>, node_test: NodeTest, axis: Axis) -> Self {
        Self {
            key: key.into(),
            node_test,
            axis,
            conditions: Vec::new(),
        }
    }

    /// Returns `true` if this is a wildcard selection.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self.node_test, NodeTest::Any)
    }

    fn fmt_predicate(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.conditions.len().saturating_sub(1);
        for (index, condition) in self.conditions.iter().enumerate() {
            if index == 0 {
                f.write_str("[")?;
            } else {
                write!(f, " {} ", condition.join.as_str())?;
            }
            write!(f, "{condition}")?;
            if index == last {
                f.write_str("]")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TagSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.as_str(), self.node_test)?;
        self.fmt_predicate(f)
    }
}

/// The ordered list of selections that makes up a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPath {
    /// Selections in insertion order.
    pub selections: Vec<TagSelection>,
}

impl QueryPath {
    /// Returns `true` if no selection was made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Fragments are concatenated without a separator; each one starts with its
/// own axis token.
impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selection in &self.selections {
            write!(f, "{selection}")?;
        }
        Ok(())
    }
}
