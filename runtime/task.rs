#![warn(missing_docs)]

//! Isolated tasks of execution

use std::{fmt, panic};

use crate::binding::Never;
use crate::boxed::prelude::*;
use crate::boxed::Heap;
use crate::intern::Interner;

/// Isolated task of execution
///
/// All compiled code and every primitive runs inside a task. It provides a dedicated [`Heap`] as
/// well as an isolation boundary against panics. A task is inherently single threaded; it's not
/// possible for one task to be executing on multiple threads at the same time.
pub struct Task {
    heap: Heap,
}

impl Task {
    /// Creates a new empty task
    pub fn new() -> Task {
        Self::with_capacity(Heap::DEFAULT_CAPACITY)
    }

    /// Creates a new empty task with room for `count` boxes before its heap grows
    pub fn with_capacity(count: usize) -> Task {
        Task {
            heap: Heap::new(Interner::new(), count),
        }
    }

    /// Returns this task's dedicated heap
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Returns a mutable reference to this task's dedicated heap
    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    /// Panics the current task
    ///
    /// This unwinds to the task's entry point which reports `message` and terminates the program.
    pub fn panic(&mut self, message: String) -> Never {
        log::debug!("task panicked: {}", message);

        // `resume_unwind` skips the panic hook so the message is only reported once
        panic::resume_unwind(Box::new(message));
    }

    /// Returns the success value of `result` or panics the task with its error
    #[allow(unreachable_code)]
    pub fn unwrap_or_panic<T, E: fmt::Display>(&mut self, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => match self.panic(err.to_string()) {},
        }
    }
}

impl Default for Task {
    fn default() -> Task {
        Task::new()
    }
}

impl AsHeap for Task {
    fn as_heap(&self) -> &Heap {
        &self.heap
    }

    fn as_heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }
}
