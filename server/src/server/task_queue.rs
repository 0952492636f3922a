use std::{collections::VecDeque, mem};

use crate::cleanup::TickingAreaCleanup;

/// Work deferred from a host notification to the next safe execution slot
pub(crate) enum ScheduledTask {
    CleanupTickingAreas(TickingAreaCleanup),
}

pub(crate) struct TaskQueue {
    tasks: VecDeque<ScheduledTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    pub fn schedule(&mut self, task: ScheduledTask) {
        self.tasks.push_back(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Takes every task queued so far. Tasks scheduled while these run wait
    /// for the following slot.
    pub fn take_all(&mut self) -> VecDeque<ScheduledTask> {
        mem::take(&mut self.tasks)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
