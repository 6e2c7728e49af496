use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::Msg;

/// Runs deferred continuations. Implementations must deliver every scheduled
/// message back to the controller; there is no cancellation.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, msg: Msg);
}

/// Virtual-clock scheduler for deterministic hosts and tests.
///
/// Clones share one clock, so a host can keep a handle while the controller
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    // Keyed by (due time, insertion order) so equal deadlines fire FIFO.
    pending: BTreeMap<(Duration, u64), Msg>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward and returns the messages that came due, in
    /// firing order.
    pub fn advance(&self, by: Duration) -> Vec<Msg> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;
        let later = clock.pending.split_off(&(now, u64::MAX));
        let due = std::mem::replace(&mut clock.pending, later);
        due.into_values().collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, msg: Msg) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.insert((due, seq), msg);
    }
}
