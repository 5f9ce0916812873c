//! In-memory sink factory
//!
//! Keeps carved outputs in memory. Used for dry runs, where nothing should
//! reach the disk, and in tests.

use crate::domain::repositories::{OutputSink, SinkError, SinkFactory};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

type Store = Rc<RefCell<BTreeMap<String, Vec<u8>>>>;

/// Sink factory storing outputs in a map keyed by name
///
/// Only closed outputs appear in [`MemorySinkFactory::outputs`]; a sink
/// dropped without being closed leaves no entry.
#[derive(Default)]
pub struct MemorySinkFactory {
    store: Store,
    created: Vec<String>,
    /// Discard block contents, keeping only lengths
    discard_data: bool,
}

impl MemorySinkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that counts bytes but keeps no contents
    pub fn discarding() -> Self {
        Self {
            discard_data: true,
            ..Self::default()
        }
    }

    /// Names passed to `create`, in order
    pub fn created(&self) -> &[String] {
        &self.created
    }

    /// Contents of a closed output
    pub fn output(&self, name: &str) -> Option<Vec<u8>> {
        self.store.borrow().get(name).cloned()
    }

    /// All closed outputs
    pub fn outputs(&self) -> BTreeMap<String, Vec<u8>> {
        self.store.borrow().clone()
    }
}

impl SinkFactory for MemorySinkFactory {
    type Sink = MemorySink;

    fn create(&mut self, name: &str) -> Result<MemorySink, SinkError> {
        self.created.push(name.to_string());
        Ok(MemorySink {
            name: name.to_string(),
            data: Vec::new(),
            discard_data: self.discard_data,
            store: Rc::clone(&self.store),
        })
    }
}

/// An in-memory output
pub struct MemorySink {
    name: String,
    data: Vec<u8>,
    discard_data: bool,
    store: Store,
}

impl OutputSink for MemorySink {
    fn write_block(&mut self, block: &[u8]) -> Result<(), SinkError> {
        if !self.discard_data {
            self.data.extend_from_slice(block);
        }
        Ok(())
    }

    fn close(self) -> Result<(), SinkError> {
        self.store.borrow_mut().insert(self.name, self.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_sink_leaves_no_output() {
        let mut factory = MemorySinkFactory::new();
        let mut sink = factory.create("000.jpg").unwrap();
        sink.write_block(&[1, 2, 3]).unwrap();
        drop(sink);

        assert_eq!(factory.created(), ["000.jpg"]);
        assert!(factory.output("000.jpg").is_none());
    }

    #[test]
    fn test_discarding_keeps_names_only() {
        let mut factory = MemorySinkFactory::discarding();
        let mut sink = factory.create("000.jpg").unwrap();
        sink.write_block(&[1, 2, 3]).unwrap();
        sink.close().unwrap();

        assert_eq!(factory.output("000.jpg").unwrap(), Vec::<u8>::new());
    }
}
