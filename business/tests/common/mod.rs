//! Shared helpers for the business integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use roster_business::{
    BusinessConfig, ConfirmDecision, ConfirmDialog, NotificationSurface, PromptSurface, Toast,
    UserStore,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock users endpoint plus a store pointed at it.
pub struct UsersTestCtx {
    pub mock_server: MockServer,
    pub store: UserStore,
}

impl UsersTestCtx {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let store = UserStore::from_config(&BusinessConfig::new(mock_server.uri()));

        Self { mock_server, store }
    }

    pub async fn mount_users(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn reset(&self) {
        self.mock_server.reset().await;
    }
}

/// Two records shaped like the public endpoint's, including fields the store ignores.
pub fn users_json(ids: &[u64]) -> serde_json::Value {
    serde_json::Value::Array(
        ids.iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "name": format!("User {id}"),
                    "username": format!("user{id}"),
                    "email": format!("user{id}@example.com"),
                    "phone": "1-770-736-8031",
                    "website": "example.org",
                    "address": { "street": "Kulas Light", "city": "Gwenborough" },
                    "company": { "name": "Romaguera-Crona" }
                })
            })
            .collect(),
    )
}

/// Prompt answering with a fixed decision.
pub struct FixedPrompt {
    pub decision: ConfirmDecision,
    pub asked: Cell<usize>,
    pub last_message: RefCell<Option<String>>,
}

impl FixedPrompt {
    pub fn new(decision: ConfirmDecision) -> Self {
        Self {
            decision,
            asked: Cell::new(0),
            last_message: RefCell::new(None),
        }
    }
}

impl PromptSurface for FixedPrompt {
    fn require(&self, dialog: &ConfirmDialog) -> ConfirmDecision {
        self.asked.set(self.asked.get() + 1);
        *self.last_message.borrow_mut() = Some(dialog.message.clone());
        self.decision
    }
}

#[derive(Default)]
pub struct ToastLog {
    pub toasts: RefCell<Vec<Toast>>,
}

impl NotificationSurface for ToastLog {
    fn add(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}
