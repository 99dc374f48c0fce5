//! Timer scheduling contract and a virtual-clock adapter for tests.

use std::{cell::RefCell, rc::Rc};

/// One-shot callback queued on a [`Scheduler`].
pub type TimerTask = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque handle returned by [`Scheduler::schedule`] and accepted by [`Scheduler::cancel`].
pub struct TimerHandle(pub u64);

/// Host service for one-shot delayed callbacks (`setTimeout` in the browser).
pub trait Scheduler {
    /// Queues `task` to run once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u64, task: TimerTask) -> TimerHandle;

    /// Cancels a pending task. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&self, handle: TimerHandle);
}

struct PendingTimer {
    due_ms: u64,
    handle: TimerHandle,
    task: TimerTask,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_handle: u64,
    pending: Vec<PendingTimer>,
}

#[derive(Clone, Default)]
/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Tasks due at the same instant run in scheduling order. Tasks scheduled by a running task are
/// eligible within the same `advance` call when they fall inside the advanced window.
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// Creates a scheduler at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of tasks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Advances virtual time by `delta_ms`, running every task that becomes due.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.inner.borrow().now_ms.saturating_add(delta_ms);
        loop {
            let next = {
                let mut clock = self.inner.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .min_by_key(|(_, timer)| (timer.due_ms, timer.handle))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let timer = clock.pending.remove(index);
                    clock.now_ms = timer.due_ms;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u64, task: TimerTask) -> TimerHandle {
        let mut clock = self.inner.borrow_mut();
        clock.next_handle += 1;
        let handle = TimerHandle(clock.next_handle);
        let due_ms = clock.now_ms.saturating_add(delay_ms);
        clock.pending.push(PendingTimer {
            due_ms,
            handle,
            task,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|timer| timer.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> TimerTask) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> TimerTask {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn tasks_fire_in_due_order_once_time_reaches_them() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(300, task("late"));
        scheduler.schedule(100, task("early"));
        scheduler.advance(99);
        assert!(log.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["early"]);

        scheduler.advance(500);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now_ms(), 600);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let handle = scheduler.schedule(10, task("cancelled"));
        scheduler.cancel(handle);
        scheduler.advance(100);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn tasks_scheduled_from_a_task_run_within_the_same_advance() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_log = log.clone();
        scheduler.schedule(
            100,
            Box::new(move || {
                inner_log.borrow_mut().push(inner_scheduler.now_ms());
                let nested_log = inner_log.clone();
                let nested_scheduler = inner_scheduler.clone();
                inner_scheduler.schedule(
                    50,
                    Box::new(move || nested_log.borrow_mut().push(nested_scheduler.now_ms())),
                );
            }),
        );
        scheduler.advance(200);

        assert_eq!(*log.borrow(), vec![100, 150]);
    }
}
