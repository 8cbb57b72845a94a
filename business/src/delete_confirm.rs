//! Confirm-before-delete flow.
//!
//! `DeleteConfirm` owns no state of its own. It builds the dialog for a user, asks the
//! prompt surface for a decision, and only on an explicit accept runs the deletion
//! callback and then reports the removal through the notification surface.
//!
//! Rendering of dialogs and toasts belongs to the UI layer, which implements
//! [`PromptSurface`] and [`NotificationSurface`].

use std::time::Duration;

use log::{debug, info};

use crate::users::User;

/// How long the "user deleted" toast stays on screen.
pub const DELETE_TOAST_LIFE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSeverity {
    Secondary,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    ExclamationTriangle,
}

/// One of the two buttons of a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: String,
    pub severity: ButtonSeverity,
    pub outlined: bool,
}

/// What the prompt surface is asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub message: String,
    pub header: String,
    pub icon: DialogIcon,
    pub reject: DialogAction,
    pub accept: DialogAction,
}

impl ConfirmDialog {
    pub fn delete_user(user: &User) -> Self {
        Self {
            message: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                user.name
            ),
            header: "Confirm Deletion".to_string(),
            icon: DialogIcon::ExclamationTriangle,
            reject: DialogAction {
                label: "Cancel".to_string(),
                severity: ButtonSeverity::Secondary,
                outlined: true,
            },
            accept: DialogAction {
                label: "Delete".to_string(),
                severity: ButtonSeverity::Danger,
                outlined: false,
            },
        }
    }
}

/// The user's answer to a [`ConfirmDialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Accept,
    Reject,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub summary: String,
    pub detail: String,
    pub life: Duration,
}

impl Toast {
    pub fn user_deleted(user: &User) -> Self {
        Self {
            severity: ToastSeverity::Warn,
            summary: "User deleted".to_string(),
            detail: format!("{} has been deleted", user.name),
            life: DELETE_TOAST_LIFE,
        }
    }
}

/// Modal prompt that resolves to an explicit decision.
pub trait PromptSurface {
    fn require(&self, dialog: &ConfirmDialog) -> ConfirmDecision;
}

/// Fire-and-forget toast sink.
pub trait NotificationSurface {
    fn add(&self, toast: Toast);
}

#[derive(Debug)]
pub struct DeleteConfirm<P, N> {
    prompt: P,
    notifier: N,
}

impl<P, N> DeleteConfirm<P, N>
where
    P: PromptSurface,
    N: NotificationSurface,
{
    pub fn new(prompt: P, notifier: N) -> Self {
        Self { prompt, notifier }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Ask before deleting `user`.
    ///
    /// On accept, `on_confirm` runs first and the toast is emitted after it returns.
    /// On reject nothing else happens. The decision is returned either way.
    pub fn show_delete_confirm(&self, user: &User, on_confirm: impl FnOnce()) -> ConfirmDecision {
        let dialog = ConfirmDialog::delete_user(user);
        let decision = self.prompt.require(&dialog);

        match decision {
            ConfirmDecision::Accept => {
                on_confirm();
                self.notifier.add(Toast::user_deleted(user));
                info!("Deleted user {} after confirmation", user.id);
            }
            ConfirmDecision::Reject => {
                debug!("Deletion of user {} cancelled", user.id);
            }
        }

        decision
    }
}
