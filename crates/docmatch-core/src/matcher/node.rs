use crate::{
    document::FieldPath,
    value::{Value, ValueTag},
};
use std::fmt;

///
/// Matcher AST
///
/// Immutable predicate tree over documents. Every node exclusively owns its
/// children, its path and its operand; there are no shared or back
/// references.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Gt = 0x02,
    Gte = 0x03,
    Lt = 0x04,
    Lte = 0x05,
    Ne = 0x06,
    In = 0x07,
    Nin = 0x08,
}

impl CompareOp {
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Ne,
        Self::In,
        Self::Nin,
    ];

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// `$`-prefixed operator name used in query documents.
    #[must_use]
    pub const fn operator_name(self) -> &'static str {
        match self {
            Self::Eq => "$eq",
            Self::Gt => "$gt",
            Self::Gte => "$gte",
            Self::Lt => "$lt",
            Self::Lte => "$lte",
            Self::Ne => "$ne",
            Self::In => "$in",
            Self::Nin => "$nin",
        }
    }

    /// Resolve an operator name (`"$gt"`) to its opcode.
    #[must_use]
    pub fn from_operator_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.operator_name() == name)
    }

    #[must_use]
    pub const fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::Nin)
    }

    /// Whether this operator is defined as the negation of another.
    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(self, Self::Ne | Self::Nin)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator_name())
    }
}

///
/// LogicalOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum LogicalOp {
    And = 0x10,
    Or = 0x11,
    Nor = 0x12,
}

impl LogicalOp {
    pub const ALL: [Self; 3] = [Self::And, Self::Or, Self::Nor];

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn operator_name(self) -> &'static str {
        match self {
            Self::And => "$and",
            Self::Or => "$or",
            Self::Nor => "$nor",
        }
    }

    #[must_use]
    pub fn from_operator_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.operator_name() == name)
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator_name())
    }
}

///
/// ExistsMatcher
///
/// `{path: {$exists: expected}}`
///

#[derive(Clone, Debug, PartialEq)]
pub struct ExistsMatcher {
    pub(crate) path: FieldPath,
    pub(crate) expected: bool,
}

impl ExistsMatcher {
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn expected(&self) -> bool {
        self.expected
    }
}

///
/// TypeMatcher
///
/// `{path: {$type: code}}`
///

#[derive(Clone, Debug, PartialEq)]
pub struct TypeMatcher {
    pub(crate) path: FieldPath,
    pub(crate) expected: ValueTag,
}

impl TypeMatcher {
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn expected(&self) -> ValueTag {
        self.expected
    }
}

///
/// CompareMatcher
///
/// `{path: operand}` for `Eq`, `{path: {$op: operand}}` otherwise.
/// The operand is an owned snapshot taken at construction.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CompareMatcher {
    pub(crate) op: CompareOp,
    pub(crate) path: FieldPath,
    pub(crate) operand: Value,
}

impl CompareMatcher {
    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn operand(&self) -> &Value {
        &self.operand
    }
}

///
/// NotMatcher
///
/// Negates its child. The path is kept only to rebuild the
/// `{path: {$not: ...}}` shape; evaluation ignores it.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NotMatcher {
    pub(crate) path: FieldPath,
    pub(crate) child: Box<MatcherNode>,
}

impl NotMatcher {
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub fn child(&self) -> &MatcherNode {
        &self.child
    }
}

///
/// LogicalMatcher
///
/// Binary combinator; `right` is absent for a single-leg combinator.
///

#[derive(Clone, Debug, PartialEq)]
pub struct LogicalMatcher {
    pub(crate) op: LogicalOp,
    pub(crate) left: Box<MatcherNode>,
    pub(crate) right: Option<Box<MatcherNode>>,
}

impl LogicalMatcher {
    #[must_use]
    pub const fn op(&self) -> LogicalOp {
        self.op
    }

    #[must_use]
    pub fn left(&self) -> &MatcherNode {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> Option<&MatcherNode> {
        self.right.as_deref()
    }
}

///
/// MatcherNode
///

#[derive(Clone, Debug, PartialEq)]
pub enum MatcherNode {
    Exists(ExistsMatcher),
    Type(TypeMatcher),
    Compare(CompareMatcher),
    Not(NotMatcher),
    Logical(LogicalMatcher),
}

impl MatcherNode {
    /// Field path this node is keyed by, if any.
    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Exists(m) => Some(&m.path),
            Self::Type(m) => Some(&m.path),
            Self::Compare(m) => Some(&m.path),
            Self::Not(m) => Some(&m.path),
            Self::Logical(_) => None,
        }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, Self::Not(_) | Self::Logical(_))
    }

    /// Direct children, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        let (first, second) = match self {
            Self::Not(m) => (Some(&*m.child), None),
            Self::Logical(m) => (Some(&*m.left), m.right.as_deref()),
            Self::Exists(_) | Self::Type(_) | Self::Compare(_) => (None, None),
        };

        first.into_iter().chain(second)
    }
}
