//! Test doubles for the store and the delete-confirm flow.

#![cfg(test)]

use std::cell::RefCell;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::delete_confirm::{
    ConfirmDecision, ConfirmDialog, NotificationSurface, PromptSurface, Toast,
};
use crate::users::{ApiResult, User, UserFormData, UserId, UsersApiError, UsersFetcher};

/// Fetcher answering every call with a preset result.
#[derive(Debug)]
pub struct MockUsersFetcher {
    response: Mutex<ApiResult<Vec<User>>>,
    calls: AtomicUsize,
}

impl MockUsersFetcher {
    pub fn ok(users: Vec<User>) -> Self {
        Self {
            response: Mutex::new(Ok(users)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: UsersApiError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond_with(&self, response: ApiResult<Vec<User>>) {
        *self.response.lock().expect("mock fetcher lock poisoned") = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsersFetcher for MockUsersFetcher {
    async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .expect("mock fetcher lock poisoned")
            .clone()
    }
}

/// Prompt that always answers with the same decision and remembers what it was shown.
#[derive(Debug)]
pub struct ScriptedPrompt {
    decision: ConfirmDecision,
    shown: RefCell<Vec<ConfirmDialog>>,
}

impl ScriptedPrompt {
    pub fn new(decision: ConfirmDecision) -> Self {
        Self {
            decision,
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<ConfirmDialog> {
        self.shown.borrow().clone()
    }
}

impl PromptSurface for ScriptedPrompt {
    fn require(&self, dialog: &ConfirmDialog) -> ConfirmDecision {
        self.shown.borrow_mut().push(dialog.clone());
        self.decision
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl NotificationSurface for RecordingNotifier {
    fn add(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub fn sample_user(id: UserId, name: &str) -> User {
    let handle = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    User {
        id,
        name: name.to_string(),
        username: handle.clone(),
        email: format!("{handle}@example.com"),
        phone: format!("555-01{id:02}"),
    }
}

pub fn form(name: &str) -> UserFormData {
    let handle = name.to_lowercase();
    UserFormData {
        name: name.to_string(),
        username: handle.clone(),
        email: format!("{handle}@example.com"),
        phone: "555-0100".to_string(),
    }
}
