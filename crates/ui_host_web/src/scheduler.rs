//! `setTimeout`-backed [`Scheduler`] adapter.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use ui_host::{Scheduler, TimerHandle, TimerTask};

/// Armed timers keyed by scheduler handle.
///
/// Entries leave the table when cancelled, or on the first sweep after they fire. Fired entries
/// are not dropped from inside their own callback.
struct TimerTable<T> {
    next_handle: u64,
    live: HashMap<u64, T>,
    fired: Vec<u64>,
}

impl<T> Default for TimerTable<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            live: HashMap::new(),
            fired: Vec::new(),
        }
    }
}

impl<T> TimerTable<T> {
    fn reserve(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }

    fn insert(&mut self, handle: TimerHandle, entry: T) {
        self.live.insert(handle.0, entry);
    }

    fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.live.remove(&handle.0)
    }

    fn mark_fired(&mut self, handle: TimerHandle) {
        self.fired.push(handle.0);
    }

    /// Removes every fired entry; the caller drops them outside the table borrow.
    fn sweep(&mut self) -> Vec<T> {
        let fired = std::mem::take(&mut self.fired);
        fired
            .into_iter()
            .filter_map(|handle| self.live.remove(&handle))
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.live.len()
    }
}

#[cfg(target_arch = "wasm32")]
struct ArmedTimer {
    timeout_id: i32,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
type TimerEntry = ArmedTimer;

#[cfg(not(target_arch = "wasm32"))]
type TimerEntry = ();

#[derive(Default)]
/// Browser scheduler that queues tasks with `window.setTimeout`.
///
/// Each callback stays owned by the scheduler until it fires or is cancelled. Outside `wasm32`
/// tasks are dropped unrun and handles are synthetic.
pub struct WebScheduler {
    timers: Rc<RefCell<TimerTable<TimerEntry>>>,
}

impl WebScheduler {
    /// Creates a scheduler bound to the current window.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay_ms: u64, task: TimerTask) -> TimerHandle {
        let stale = self.timers.borrow_mut().sweep();
        drop(stale);
        let handle = self.timers.borrow_mut().reserve();

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let Ok(window) = crate::interop::window() else {
                return handle;
            };
            let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            let timers = Rc::downgrade(&self.timers);
            let mut task = Some(task);
            let callback = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(task) = task.take() {
                    task();
                }
                if let Some(timers) = timers.upgrade() {
                    timers.borrow_mut().mark_fired(handle);
                }
            }));
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            ) {
                Ok(timeout_id) => self.timers.borrow_mut().insert(
                    handle,
                    ArmedTimer {
                        timeout_id,
                        _callback: callback,
                    },
                ),
                Err(err) => web_sys::console::warn_1(&err),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (delay_ms, task);

        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let Some(timer) = self.timers.borrow_mut().cancel(handle) else {
            return;
        };

        #[cfg(target_arch = "wasm32")]
        if let Ok(window) = crate::interop::window() {
            window.clear_timeout_with_handle(timer.timeout_id);
        }

        drop(timer);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn native_fallback_hands_out_distinct_handles() {
        let scheduler = WebScheduler::new();
        let first = scheduler.schedule(10, Box::new(|| {}));
        let second = scheduler.schedule(10, Box::new(|| {}));

        assert_ne!(first, second);
        scheduler.cancel(first);
    }

    #[test]
    fn cancelled_and_fired_timers_release_their_entries() {
        let mut table = TimerTable::default();
        let resize = table.reserve();
        let toast = table.reserve();
        let focus = table.reserve();
        table.insert(resize, "resize");
        table.insert(toast, "toast");
        table.insert(focus, "focus");

        assert_eq!(table.cancel(resize), Some("resize"));
        assert_eq!(table.cancel(resize), None);

        table.mark_fired(toast);
        assert_eq!(table.len(), 2, "fired entries wait for the next sweep");
        assert_eq!(table.sweep(), vec!["toast"]);
        assert_eq!(table.sweep(), Vec::<&str>::new());

        assert_eq!(table.len(), 1);
        assert_eq!(table.cancel(focus), Some("focus"));
        assert_eq!(table.len(), 0);
    }
}
