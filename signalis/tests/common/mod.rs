#![allow(dead_code)]

use signalis::{Combiner, testing::CallLog};
use std::{cell::Cell, rc::Rc};

// ============================================================================
// Test Combiners
// ============================================================================

/// Adds up every slot result.
#[derive(Debug, Default)]
pub struct Sum {
    total: i64,
}

impl Combiner<i64> for Sum {
    type Output = i64;

    fn combine(&mut self, item: i64) {
        self.total += item;
    }

    fn result(&mut self) -> i64 {
        std::mem::take(&mut self.total)
    }

    fn reset(&mut self) {
        self.total = 0;
    }
}

// ============================================================================
// Test Slots and Payloads
// ============================================================================

/// A slot that appends `index` to `log` when called.
pub fn order_slot(log: &CallLog<usize>, index: usize) -> impl FnMut() + use<> {
    let log = log.clone();
    move || log.record(index)
}

/// An argument that counts how often it was cloned.
pub struct CloneCounted {
    pub clones: Rc<Cell<usize>>,
}

impl Clone for CloneCounted {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            clones: self.clones.clone(),
        }
    }
}
