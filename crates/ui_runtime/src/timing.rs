//! Debounce and throttle wrappers driven by a host [`Scheduler`].

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use ui_host::{Scheduler, TimerHandle};

struct DebounceState<A> {
    pending: Option<TimerHandle>,
    latest: Option<A>,
}

/// Delays `f` until `wait_ms` pass without another call; the last call's argument wins.
pub struct Debounced<A> {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u64,
    callback: Rc<dyn Fn(A)>,
    state: Rc<RefCell<DebounceState<A>>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            wait_ms: self.wait_ms,
            callback: self.callback.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, arg: A) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.latest = Some(arg);
            state.pending.take()
        };
        if let Some(handle) = previous {
            self.scheduler.cancel(handle);
        }

        let state = self.state.clone();
        let callback = self.callback.clone();
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                let latest = {
                    let mut state = state.borrow_mut();
                    state.pending = None;
                    state.latest.take()
                };
                if let Some(arg) = latest {
                    callback(arg);
                }
            }),
        );
        self.state.borrow_mut().pending = Some(handle);
    }

    /// Drops a pending invocation.
    pub fn cancel(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.latest = None;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }
}

pub fn debounce<A: 'static>(
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u64,
    f: impl Fn(A) + 'static,
) -> Debounced<A> {
    Debounced {
        scheduler,
        wait_ms,
        callback: Rc::new(f),
        state: Rc::new(RefCell::new(DebounceState {
            pending: None,
            latest: None,
        })),
    }
}

/// Runs `f` at most once per `limit_ms`; calls inside the window are dropped.
pub struct Throttled<A> {
    scheduler: Rc<dyn Scheduler>,
    limit_ms: u64,
    callback: Rc<dyn Fn(A)>,
    in_window: Rc<Cell<bool>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            limit_ms: self.limit_ms,
            callback: self.callback.clone(),
            in_window: self.in_window.clone(),
        }
    }
}

impl<A> Throttled<A> {
    /// Invokes the wrapped function unless a previous call is still inside its window.
    /// Returns whether it ran.
    pub fn call(&self, arg: A) -> bool {
        if self.in_window.get() {
            return false;
        }
        self.in_window.set(true);
        (self.callback)(arg);
        let in_window = self.in_window.clone();
        self.scheduler
            .schedule(self.limit_ms, Box::new(move || in_window.set(false)));
        true
    }
}

pub fn throttle<A>(
    scheduler: Rc<dyn Scheduler>,
    limit_ms: u64,
    f: impl Fn(A) + 'static,
) -> Throttled<A> {
    Throttled {
        scheduler,
        limit_ms,
        callback: Rc::new(f),
        in_window: Rc::new(Cell::new(false)),
    }
}
