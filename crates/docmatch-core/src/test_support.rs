use crate::{
    document::FieldPath,
    obs::{DiagnosticEvent, DiagnosticsSink},
};
use std::cell::RefCell;

///
/// CollectingSink
///
/// Records every diagnostic event in arrival order.
///

#[derive(Default)]
pub(crate) struct CollectingSink {
    events: RefCell<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    pub(crate) fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn record(&self, event: DiagnosticEvent) {
        self.events.borrow_mut().push(event);
    }
}

pub(crate) fn path(raw: &str) -> FieldPath {
    FieldPath::new(raw).expect("test path")
}
