//! Reducer actions, side-effect intents, and transition logic for toasts and modals.

use thiserror::Error;

use crate::{
    config::UiConfig,
    model::{ToastId, ToastPhase, ToastRecord, ToastRequest, UiState},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_ui`] to mutate [`UiState`].
pub enum UiAction {
    /// Display a new toast.
    ShowToast(ToastRequest),
    /// Start the fade-out of a visible toast (auto-dismiss timer or close button).
    DismissToast {
        /// Toast to dismiss.
        toast_id: ToastId,
    },
    /// Drop a toast from the display list once its fade-out completes.
    RemoveToast {
        /// Toast to remove.
        toast_id: ToastId,
    },
    /// Mark a modal open and raise it to the top of the open stack.
    OpenModal {
        /// DOM id of the modal element.
        modal_id: String,
    },
    /// Mark a modal closed.
    CloseModal {
        /// DOM id of the modal element.
        modal_id: String,
    },
    /// Close the most recently opened modal, if any (ESC key or overlay click).
    CloseActiveModal,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_ui`] for the controller to execute.
pub enum UiEffect {
    /// Insert the toast element.
    RenderToast(ToastRecord),
    /// Start the toast's fade-out animation.
    FadeOutToast(ToastId),
    /// Detach the toast element.
    RemoveToast(ToastId),
    /// Dispatch [`UiAction::DismissToast`] after a delay.
    ScheduleToastDismiss {
        /// Toast to dismiss.
        toast_id: ToastId,
        /// Delay in milliseconds.
        after_ms: u64,
    },
    /// Dispatch [`UiAction::RemoveToast`] after a delay.
    ScheduleToastRemoval {
        /// Toast to remove.
        toast_id: ToastId,
        /// Delay in milliseconds.
        after_ms: u64,
    },
    /// Display the modal and its overlay.
    ShowModal(String),
    /// Hide the modal and its overlay.
    HideModal(String),
    /// Lock page scroll.
    LockScroll,
    /// Restore page scroll.
    UnlockScroll,
    /// Focus the modal's first focusable descendant after a delay.
    FocusModal {
        /// DOM id of the modal element.
        modal_id: String,
        /// Delay in milliseconds.
        after_ms: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing state that no longer exists.
pub enum ReducerError {
    /// The toast was already removed (or never existed).
    #[error("toast {0:?} not found")]
    ToastNotFound(ToastId),
}

/// Applies a [`UiAction`] to the page state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::ToastNotFound`] when a dismiss/remove targets a toast that is gone.
pub fn reduce_ui(
    state: &mut UiState,
    config: &UiConfig,
    action: UiAction,
) -> Result<Vec<UiEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        UiAction::ShowToast(request) => {
            state.toasts.next_id += 1;
            let toast_id = ToastId(state.toasts.next_id);
            let duration_ms = request
                .duration_ms
                .unwrap_or(config.toast.default_duration_ms);
            let record = ToastRecord {
                id: toast_id,
                kind: request.kind,
                title: request.title,
                message: request.message,
                duration_ms,
                icon: request.icon,
                phase: ToastPhase::Visible,
            };
            state.toasts.toasts.push(record.clone());
            effects.push(UiEffect::RenderToast(record));
            if duration_ms > 0 {
                effects.push(UiEffect::ScheduleToastDismiss {
                    toast_id,
                    after_ms: duration_ms,
                });
            }
        }
        UiAction::DismissToast { toast_id } => {
            let toast = state
                .toasts
                .toasts
                .iter_mut()
                .find(|toast| toast.id == toast_id)
                .ok_or(ReducerError::ToastNotFound(toast_id))?;
            if toast.phase == ToastPhase::Visible {
                toast.phase = ToastPhase::Leaving;
                effects.push(UiEffect::FadeOutToast(toast_id));
                effects.push(UiEffect::ScheduleToastRemoval {
                    toast_id,
                    after_ms: config.toast.fade_out_ms,
                });
            }
        }
        UiAction::RemoveToast { toast_id } => {
            let before_len = state.toasts.toasts.len();
            state.toasts.toasts.retain(|toast| toast.id != toast_id);
            if state.toasts.toasts.len() == before_len {
                return Err(ReducerError::ToastNotFound(toast_id));
            }
            effects.push(UiEffect::RemoveToast(toast_id));
        }
        UiAction::OpenModal { modal_id } => {
            let was_locked = state.modals.any_open();
            state.modals.open_stack.retain(|open| open != &modal_id);
            state.modals.open_stack.push(modal_id.clone());
            state.modals.flags.insert(modal_id.clone(), true);
            effects.push(UiEffect::ShowModal(modal_id.clone()));
            if !was_locked {
                effects.push(UiEffect::LockScroll);
            }
            effects.push(UiEffect::FocusModal {
                modal_id,
                after_ms: config.modal.focus_delay_ms,
            });
        }
        UiAction::CloseModal { modal_id } => {
            close_modal(state, modal_id, &mut effects);
        }
        UiAction::CloseActiveModal => {
            if let Some(modal_id) = state.modals.active().map(str::to_string) {
                close_modal(state, modal_id, &mut effects);
            }
        }
    }
    Ok(effects)
}

fn close_modal(state: &mut UiState, modal_id: String, effects: &mut Vec<UiEffect>) {
    state.modals.open_stack.retain(|open| open != &modal_id);
    state.modals.flags.insert(modal_id.clone(), false);
    effects.push(UiEffect::HideModal(modal_id));
    if !state.modals.any_open() {
        effects.push(UiEffect::UnlockScroll);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ToastKind;

    fn open(state: &mut UiState, modal_id: &str) -> Vec<UiEffect> {
        reduce_ui(
            state,
            &UiConfig::default(),
            UiAction::OpenModal {
                modal_id: modal_id.to_string(),
            },
        )
        .expect("open modal")
    }

    #[test]
    fn show_toast_assigns_ids_and_schedules_default_dismiss() {
        let mut state = UiState::default();
        let config = UiConfig::default();

        let effects = reduce_ui(
            &mut state,
            &config,
            UiAction::ShowToast(ToastRequest::titled(ToastKind::Success, "Saved")),
        )
        .expect("show");

        let record = state.toasts.toasts[0].clone();
        assert_eq!(record.id, ToastId(1));
        assert_eq!(record.title, "Success");
        assert_eq!(record.duration_ms, 5000);
        assert_eq!(
            effects,
            vec![
                UiEffect::RenderToast(record),
                UiEffect::ScheduleToastDismiss {
                    toast_id: ToastId(1),
                    after_ms: 5000,
                },
            ]
        );
    }

    #[test]
    fn zero_duration_toast_schedules_nothing() {
        let mut state = UiState::default();
        let effects = reduce_ui(
            &mut state,
            &UiConfig::default(),
            UiAction::ShowToast(ToastRequest::new(ToastKind::Info, "sticky").with_duration_ms(0)),
        )
        .expect("show");

        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], UiEffect::RenderToast(_)));
    }

    #[test]
    fn dismiss_is_idempotent_while_leaving_and_remove_drops_record() {
        let mut state = UiState::default();
        let config = UiConfig::default();
        reduce_ui(
            &mut state,
            &config,
            UiAction::ShowToast(ToastRequest::new(ToastKind::Warning, "careful")),
        )
        .expect("show");
        let toast_id = ToastId(1);

        let first = reduce_ui(&mut state, &config, UiAction::DismissToast { toast_id })
            .expect("dismiss");
        assert_eq!(
            first,
            vec![
                UiEffect::FadeOutToast(toast_id),
                UiEffect::ScheduleToastRemoval {
                    toast_id,
                    after_ms: 300,
                },
            ]
        );
        let second = reduce_ui(&mut state, &config, UiAction::DismissToast { toast_id })
            .expect("dismiss again");
        assert!(second.is_empty());

        let removed =
            reduce_ui(&mut state, &config, UiAction::RemoveToast { toast_id }).expect("remove");
        assert_eq!(removed, vec![UiEffect::RemoveToast(toast_id)]);
        assert!(state.toasts.toasts.is_empty());

        assert_eq!(
            reduce_ui(&mut state, &config, UiAction::RemoveToast { toast_id }),
            Err(ReducerError::ToastNotFound(toast_id))
        );
    }

    #[test]
    fn opening_first_modal_locks_scroll_and_requests_focus() {
        let mut state = UiState::default();
        let effects = open(&mut state, "booking-modal");

        assert!(state.modals.is_open("booking-modal"));
        assert_eq!(
            effects,
            vec![
                UiEffect::ShowModal("booking-modal".to_string()),
                UiEffect::LockScroll,
                UiEffect::FocusModal {
                    modal_id: "booking-modal".to_string(),
                    after_ms: 100,
                },
            ]
        );
    }

    #[test]
    fn close_active_targets_most_recently_opened_and_keeps_lock_until_last() {
        let mut state = UiState::default();
        let config = UiConfig::default();
        open(&mut state, "first");
        let second_effects = open(&mut state, "second");
        assert!(!second_effects.contains(&UiEffect::LockScroll));

        let effects =
            reduce_ui(&mut state, &config, UiAction::CloseActiveModal).expect("close active");
        assert_eq!(effects, vec![UiEffect::HideModal("second".to_string())]);
        assert!(state.modals.is_open("first"));
        assert!(!state.modals.is_open("second"));

        let effects =
            reduce_ui(&mut state, &config, UiAction::CloseActiveModal).expect("close active");
        assert_eq!(
            effects,
            vec![
                UiEffect::HideModal("first".to_string()),
                UiEffect::UnlockScroll
            ]
        );

        let effects = reduce_ui(&mut state, &config, UiAction::CloseActiveModal).expect("noop");
        assert!(effects.is_empty());
    }

    #[test]
    fn reopening_an_open_modal_moves_it_to_the_top() {
        let mut state = UiState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        open(&mut state, "a");

        assert_eq!(state.modals.open_stack, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(state.modals.active(), Some("a"));
    }
}
