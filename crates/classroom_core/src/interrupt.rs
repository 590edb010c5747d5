//! Operator abort (Ctrl-C) shared between the signal handler, prompts and the runner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once the operator asks to stop; clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as interrupted. Returns true if it already was.
    pub fn trigger(&self) -> bool {
        self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
