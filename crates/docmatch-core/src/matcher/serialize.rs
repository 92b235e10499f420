//! Rendering a matcher tree back into query-document form.
//!
//! | node                 | rendered as                          |
//! |----------------------|--------------------------------------|
//! | `Compare(Eq)`        | `{path: operand}`                    |
//! | `Compare(op)`        | `{path: {op: operand}}`              |
//! | `Exists`             | `{path: {"$exists": bool}}`          |
//! | `Type`               | `{path: {"$type": code}}`            |
//! | `Not`                | `{path: {"$not": child}}`            |
//! | `Logical`            | `{op: [left, right?]}`               |

use crate::{
    document::{Document, FieldPath},
    matcher::{CompareOp, MatcherNode},
    value::Value,
};
use serde::{Serialize, Serializer};

impl MatcherNode {
    /// Query document equivalent to this tree.
    #[must_use]
    pub fn to_document(&self) -> Document {
        match self {
            Self::Compare(m) if m.op == CompareOp::Eq => keyed(&m.path, m.operand.clone()),
            Self::Compare(m) => keyed_operator(&m.path, m.op.operator_name(), m.operand.clone()),
            Self::Exists(m) => keyed_operator(&m.path, "$exists", Value::Bool(m.expected)),
            Self::Type(m) => keyed_operator(
                &m.path,
                "$type",
                Value::Int32(i32::from(m.expected.code())),
            ),
            Self::Not(m) => keyed_operator(&m.path, "$not", Value::Document(m.child.to_document())),
            Self::Logical(m) => {
                let legs = self
                    .children()
                    .map(|child| Value::Document(child.to_document()))
                    .collect::<Vec<_>>();

                let mut doc = Document::new();
                doc.insert(m.op.operator_name(), Value::Array(legs));
                doc
            }
        }
    }
}

fn keyed(path: &FieldPath, value: Value) -> Document {
    let mut doc = Document::new();
    doc.insert(path.as_str(), value);
    doc
}

fn keyed_operator(path: &FieldPath, operator: &str, operand: Value) -> Document {
    let mut inner = Document::new();
    inner.insert(operator, operand);

    keyed(path, Value::Document(inner))
}

impl Serialize for MatcherNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}
