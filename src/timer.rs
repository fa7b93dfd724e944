use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;

/// Identifies one scheduled task. Only the most recently issued token of a
/// [`PendingTask`] is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskToken(u64);

/// Tracks the single outstanding task of one kind. Scheduling again
/// invalidates whatever was pending before.
#[derive(Debug, Default)]
pub struct PendingTask {
    generation: u64,
    current: Option<TaskToken>,
}

impl PendingTask {
    pub fn schedule(&mut self) -> TaskToken {
        self.generation += 1;
        let token = TaskToken(self.generation);
        self.current = Some(token);
        token
    }

    pub fn is_current(&self, token: TaskToken) -> bool {
        self.current == Some(token)
    }

    /// Consumes the token if it is still current. A stale token returns
    /// false and must not run its work.
    pub fn complete(&mut self, token: TaskToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

/// A [`PendingTask`] paired with the browser timer backing it.
#[derive(Default)]
pub struct TimeoutSlot {
    task: PendingTask,
    handle: Option<Timeout>,
}

impl TimeoutSlot {
    pub fn cancel(&mut self) {
        if self.task.is_pending() {
            debug!("Cancelling pending timeout");
        }
        self.task.cancel();
        // Dropping the handle clears the browser timer.
        self.handle = None;
    }
}

pub type SharedTimeoutSlot = Rc<RefCell<TimeoutSlot>>;

/// Runs `callback` after `millis` unless the slot is rescheduled or
/// cancelled first. The callback receives the token it was scheduled under.
pub fn schedule<F>(slot: &SharedTimeoutSlot, millis: u32, callback: F) -> TaskToken
where
    F: FnOnce(TaskToken) + 'static,
{
    let token = slot.borrow_mut().task.schedule();
    let weak = Rc::downgrade(slot);
    let timeout = Timeout::new(millis, move || {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        let is_current = slot.borrow_mut().task.complete(token);
        if is_current {
            callback(token);
        }
    });
    // Replacing the previous handle cancels its timer.
    slot.borrow_mut().handle = Some(timeout);
    token
}
