//! Deferred work that runs after the current mutation batch.
//!
//! Caret repositioning must happen strictly after the surface mutations it
//! follows have been applied and rendered. In a browser that is "schedule
//! for the next paint frame"; headless it becomes an explicit queue: the
//! widget enqueues tasks while handling an event, the host drains them once
//! the resulting render has been applied.

use std::collections::VecDeque;

/// Work the widget postpones until after the current render/mutation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Reposition the caret to the very end of the surface.
    MoveCaretToEnd,
}

/// FIFO queue of deferred tasks.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Queue a task.
    pub fn push(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    /// Take all queued tasks, in order.
    pub fn drain(&mut self) -> Vec<T> {
        self.tasks.drain(..).collect()
    }

    /// Drop all queued tasks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T: PartialEq> DeferredQueue<T> {
    /// Queue a task unless an identical one is already pending.
    pub fn push_unique(&mut self, task: T) {
        if !self.tasks.contains(&task) {
            self.tasks.push_back(task);
        }
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
