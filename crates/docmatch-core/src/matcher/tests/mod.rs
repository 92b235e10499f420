
use crate::{
    doc,
    document::Document,
    matcher::{CompareOp, LogicalOp, Matcher, MatcherNode},
    obs::{DiagnosticEvent, with_diagnostics_sink},
    test_support::{CollectingSink, path},
    value::{Value, ValueTag},
};
use docmatch_config::{InSemantics, MatcherConfig};

///
/// HELPERS
///

fn compare(op: CompareOp, field: &str, operand: impl Into<Value>) -> MatcherNode {
    MatcherNode::compare_owned(op, path(field), operand.into())
}

fn exists(field: &str, expected: bool) -> MatcherNode {
    MatcherNode::exists(path(field), expected)
}

// Leaf that always matches `doc_with_a`.
fn always_true() -> MatcherNode {
    exists("a", true)
}

// Leaf that never matches `doc_with_a`.
fn always_false() -> MatcherNode {
    exists("a", false)
}

// Leaf that emits one diagnostic whenever it is evaluated against
// `doc_with_a`: an ordering compare with no rule for Utf8 × Int32.
fn counting_leaf() -> MatcherNode {
    compare(CompareOp::Gt, "a", "probe")
}

fn doc_with_a() -> Document {
    doc! { "a" => 1_i32 }
}

fn single(field: &str, value: impl Into<Value>) -> Document {
    let mut doc = Document::new();
    doc.insert(field, value);
    doc
}

// Evaluate with a fresh collecting sink installed; returns (result, events).
fn eval_collect(
    node: &MatcherNode,
    doc: &Document,
    config: &MatcherConfig,
) -> (bool, Vec<DiagnosticEvent>) {
    let sink = CollectingSink::default();
    let result = with_diagnostics_sink(&sink, || node.matches_with(doc, config));

    (result, sink.events())
}

// Chain of `depth` nodes: `Not` wrappers around one leaf.
fn not_chain(depth: usize) -> MatcherNode {
    let mut node = always_true();
    for _ in 1..depth {
        node = MatcherNode::not(path("a"), node);
    }

    node
}
