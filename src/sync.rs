//! This module is for synchronisation primitives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An Alarm is a clonable one-way stop signal shared by a group of threads.
///
/// Workers check it once per loop iteration and wind down after it rings.
/// An alarm that is never rung leaves the workers running forever, which is
/// the default for this crate's producer-consumer pipeline.
#[derive(Debug, Clone, Default)]
pub struct Alarm {
    bell: Arc<AtomicBool>,
}

impl Alarm {
    pub fn new() -> Alarm {
        Alarm {
            bell: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ring the alarm. All clones observe it; it cannot be un-rung.
    pub fn ring(&self) {
        self.bell.store(true, Ordering::Relaxed);
    }

    /// Has the alarm been rung ?
    pub fn rung(&self) -> bool {
        self.bell.load(Ordering::Relaxed)
    }
}
