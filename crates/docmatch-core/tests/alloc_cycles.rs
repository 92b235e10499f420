//! Allocation accounting across repeated build, evaluate and teardown cycles.
//!
//! Kept as a single test: the counting allocator is process-wide and a second
//! test running in parallel would perturb the live count.

use docmatch_core::{
    doc,
    document::{Document, FieldPath},
    matcher::{CompareOp, LogicalOp, Matcher, MatcherNode},
    value::{Value, ValueTag},
};
use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicIsize, Ordering},
};

///
/// CountingAllocator
///

struct CountingAllocator;

static LIVE: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        LIVE.fetch_add(1, Ordering::SeqCst);
        // SAFETY: forwarded unchanged to the system allocator.
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE.fetch_sub(1, Ordering::SeqCst);
        // SAFETY: `ptr` came from `alloc` above with the same layout.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

fn live() -> isize {
    LIVE.load(Ordering::SeqCst)
}

fn path(raw: &str) -> FieldPath {
    FieldPath::new(raw).expect("test path")
}

fn build_tree() -> MatcherNode {
    let members = Value::Array(vec![Value::from("x"), Value::Int64(3)]);

    let numeric = MatcherNode::and(
        MatcherNode::compare(CompareOp::Gte, path("user.age"), &Value::Int32(18)),
        MatcherNode::compare(CompareOp::Lt, path("user.age"), &Value::Double(65.5)),
    );
    let membership = MatcherNode::logical(
        LogicalOp::Or,
        MatcherNode::compare(CompareOp::In, path("tags.0"), &members),
        Some(MatcherNode::type_of(path("name"), ValueTag::Utf8)),
    );
    let negated = MatcherNode::not(
        path("banned"),
        MatcherNode::exists(path("banned"), true),
    );

    MatcherNode::nor(
        MatcherNode::and(numeric, membership),
        MatcherNode::logical(LogicalOp::And, negated, None),
    )
}

fn sample_doc() -> Document {
    doc! {
        "user" => doc! { "age" => 30_i64 },
        "tags" => vec![Value::from("x")],
        "name" => "ada",
    }
}

fn cycle(doc: &Document) {
    let matcher = Matcher::with_defaults(build_tree()).expect("matcher");
    let first = matcher.matches(doc);
    let second = matcher.matches(doc);
    assert_eq!(first, second);

    let rendered = matcher.to_document();
    assert!(!rendered.is_empty());
    drop(rendered);

    matcher.into_root().teardown();
}

#[test]
fn build_evaluate_teardown_cycles_release_everything() {
    let doc = sample_doc();

    // warm up lazily initialized runtime state
    cycle(&doc);

    let baseline = live();
    for _ in 0..500 {
        cycle(&doc);
    }
    assert_eq!(live(), baseline, "allocations leaked across cycles");

    let before_deep = live();
    let mut deep = MatcherNode::exists(path("a"), true);
    for _ in 0..10_000 {
        deep = MatcherNode::not(path("a"), deep);
    }
    assert!(live() > before_deep);
    deep.teardown();
    assert_eq!(live(), before_deep, "deep tree not fully released");
}
