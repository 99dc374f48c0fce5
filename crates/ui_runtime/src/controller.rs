//! Page-scoped UI controller: owns toast/modal state, runs reducer effects, and publishes events.
//!
//! One controller is created per page at boot and shared by handle with every installer that
//! needs it. DOM work goes through [`UiSurface`]; delays go through the injected
//! [`Scheduler`], so the whole lifecycle can be driven by a virtual clock in tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
};

use ui_host::{Scheduler, TimerHandle};

use crate::{
    config::UiConfig,
    model::{ToastId, ToastKind, ToastRecord, ToastRequest, UiState},
    reducer::{reduce_ui, ReducerError, UiAction, UiEffect},
};

/// DOM-facing side of the controller.
pub trait UiSurface {
    /// Inserts a toast element.
    fn render_toast(&self, toast: &ToastRecord);
    /// Starts a toast's fade-out animation.
    fn fade_out_toast(&self, toast_id: ToastId);
    /// Detaches a toast element.
    fn remove_toast(&self, toast_id: ToastId);
    /// Whether both the modal element and its overlay exist.
    fn modal_exists(&self, modal_id: &str) -> bool;
    /// Shows or hides a modal and its overlay.
    fn set_modal_visible(&self, modal_id: &str, visible: bool);
    /// Locks or restores page scrolling.
    fn set_scroll_locked(&self, locked: bool);
    /// Focuses the first focusable descendant of a modal.
    fn focus_first_in(&self, modal_id: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Events published to controller subscribers after effects are applied.
pub enum UiEvent {
    ToastShown { toast_id: ToastId, kind: ToastKind },
    ToastDismissed(ToastId),
    ToastRemoved(ToastId),
    ModalOpened(String),
    ModalClosed(String),
    ScrollLockChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&UiEvent)>;

struct ControllerInner {
    config: UiConfig,
    state: RefCell<UiState>,
    scheduler: Rc<dyn Scheduler>,
    surface: Rc<dyn UiSurface>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
    dismiss_timers: RefCell<HashMap<ToastId, TimerHandle>>,
    scroll_locked: Cell<bool>,
}

#[derive(Clone)]
/// Shared handle to the page's UI controller.
pub struct UiController {
    inner: Rc<ControllerInner>,
}

impl UiController {
    pub fn new(config: UiConfig, scheduler: Rc<dyn Scheduler>, surface: Rc<dyn UiSurface>) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                config,
                state: RefCell::new(UiState::default()),
                scheduler,
                surface,
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                dismiss_timers: RefCell::new(HashMap::new()),
                scroll_locked: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.inner.scheduler.clone()
    }

    /// Snapshot of the toasts currently in the display list.
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.inner.state.borrow().toasts.toasts.clone()
    }

    pub fn is_modal_open(&self, modal_id: &str) -> bool {
        self.inner.state.borrow().modals.is_open(modal_id)
    }

    pub fn active_modal(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .modals
            .active()
            .map(str::to_string)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.scroll_locked.get()
    }

    /// Registers an event callback. Callbacks run after the triggering effect is applied.
    pub fn subscribe(&self, callback: impl Fn(&UiEvent) + 'static) -> SubscriptionId {
        let next = self.inner.next_subscription.get() + 1;
        self.inner.next_subscription.set(next);
        let id = SubscriptionId(next);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id);
    }

    /// Displays a toast and returns its id.
    pub fn show_toast(&self, request: ToastRequest) -> Option<ToastId> {
        self.dispatch(UiAction::ShowToast(request))
            .into_iter()
            .find_map(|effect| match effect {
                UiEffect::RenderToast(record) => Some(record.id),
                _ => None,
            })
    }

    pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(ToastRequest::titled(ToastKind::Success, message))
    }

    pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(ToastRequest::titled(ToastKind::Error, message))
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(ToastRequest::titled(ToastKind::Warning, message))
    }

    pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show_toast(ToastRequest::titled(ToastKind::Info, message))
    }

    /// Starts the fade-out of a toast (close button).
    pub fn dismiss_toast(&self, toast_id: ToastId) {
        self.dispatch(UiAction::DismissToast { toast_id });
    }

    /// Opens a modal. Returns `false` without touching state when the modal or its overlay is
    /// missing from the page.
    pub fn open_modal(&self, modal_id: &str) -> bool {
        if !self.inner.surface.modal_exists(modal_id) {
            return false;
        }
        self.dispatch(UiAction::OpenModal {
            modal_id: modal_id.to_string(),
        });
        true
    }

    /// Closes a modal. Returns `false` when the modal or its overlay is missing from the page.
    pub fn close_modal(&self, modal_id: &str) -> bool {
        if !self.inner.surface.modal_exists(modal_id) {
            return false;
        }
        self.dispatch(UiAction::CloseModal {
            modal_id: modal_id.to_string(),
        });
        true
    }

    /// Closes the most recently opened modal and returns its id.
    ///
    /// Open modals whose element has left the page are dropped from the stack on the way down.
    pub fn close_active_modal(&self) -> Option<String> {
        while let Some(active) = self.active_modal() {
            let present = self.inner.surface.modal_exists(&active);
            self.dispatch(UiAction::CloseActiveModal);
            if present {
                return Some(active);
            }
        }
        None
    }

    /// Runs an action through the reducer and applies the resulting effects.
    ///
    /// Returns the applied effects. Actions racing a removed toast are dropped silently.
    pub fn dispatch(&self, action: UiAction) -> Vec<UiEffect> {
        let result = {
            let mut state = self.inner.state.borrow_mut();
            reduce_ui(&mut state, &self.inner.config, action)
        };
        match result {
            Ok(effects) => {
                for effect in &effects {
                    self.run_effect(effect.clone());
                }
                effects
            }
            Err(ReducerError::ToastNotFound(_)) => Vec::new(),
        }
    }

    fn run_effect(&self, effect: UiEffect) {
        let surface = &self.inner.surface;
        match effect {
            UiEffect::RenderToast(record) => {
                surface.render_toast(&record);
                self.publish(&UiEvent::ToastShown {
                    toast_id: record.id,
                    kind: record.kind,
                });
            }
            UiEffect::FadeOutToast(toast_id) => {
                if let Some(handle) = self.inner.dismiss_timers.borrow_mut().remove(&toast_id) {
                    self.inner.scheduler.cancel(handle);
                }
                surface.fade_out_toast(toast_id);
                self.publish(&UiEvent::ToastDismissed(toast_id));
            }
            UiEffect::RemoveToast(toast_id) => {
                surface.remove_toast(toast_id);
                self.publish(&UiEvent::ToastRemoved(toast_id));
            }
            UiEffect::ScheduleToastDismiss { toast_id, after_ms } => {
                let handle = self.schedule_action(after_ms, UiAction::DismissToast { toast_id });
                self.inner
                    .dismiss_timers
                    .borrow_mut()
                    .insert(toast_id, handle);
            }
            UiEffect::ScheduleToastRemoval { toast_id, after_ms } => {
                self.schedule_action(after_ms, UiAction::RemoveToast { toast_id });
            }
            UiEffect::ShowModal(modal_id) => {
                surface.set_modal_visible(&modal_id, true);
                self.publish(&UiEvent::ModalOpened(modal_id));
            }
            UiEffect::HideModal(modal_id) => {
                surface.set_modal_visible(&modal_id, false);
                self.publish(&UiEvent::ModalClosed(modal_id));
            }
            UiEffect::LockScroll => self.set_scroll_locked(true),
            UiEffect::UnlockScroll => self.set_scroll_locked(false),
            UiEffect::FocusModal { modal_id, after_ms } => {
                let weak = Rc::downgrade(&self.inner);
                self.inner.scheduler.schedule(
                    after_ms,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            if inner.state.borrow().modals.is_open(&modal_id) {
                                inner.surface.focus_first_in(&modal_id);
                            }
                        }
                    }),
                );
            }
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.inner.scroll_locked.set(locked);
        self.inner.surface.set_scroll_locked(locked);
        self.publish(&UiEvent::ScrollLockChanged(locked));
    }

    fn schedule_action(&self, after_ms: u64, action: UiAction) -> TimerHandle {
        let weak: Weak<ControllerInner> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(
            after_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let UiAction::DismissToast { toast_id } = &action {
                        inner.dismiss_timers.borrow_mut().remove(toast_id);
                    }
                    UiController { inner }.dispatch(action);
                }
            }),
        )
    }

    fn publish(&self, event: &UiEvent) {
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(event);
        }
    }
}
