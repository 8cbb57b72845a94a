//! In-memory user roster with fetch status.
//!
//! The store owns the authoritative list of users for a session together with the
//! `loading` / `error` pair describing the last fetch. Create, update and delete are
//! local and synchronous; only the fetch touches the network.
//!
//! ## Fetch state machine
//! `Idle -> Loading (error cleared) -> Idle (users replaced) | Idle (error set)`
//!
//! Two ways to drive it:
//! - `store.fetch_users().await` when the caller can hold `&mut store` across the request.
//! - `store.start_fetch()` + `task.run()` + `store.sync()` when the caller (a UI loop) must
//!   keep reading the store while the request is in flight. The task is `Send + 'static`
//!   and can be spawned; its outcome arrives over a channel and is applied by `sync()`.
//!
//! Only one fetch is tracked at a time: `start_fetch()` returns `None` while a task is
//! still outstanding. A task dropped before finishing (e.g. a `fetch_users()` future
//! cancelled by a timeout) releases `loading` on the next `sync()` or `start_fetch()`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use crate::BusinessConfig;
use crate::users::api::{HttpUsersFetcher, UsersFetcher};
use crate::users::model::{User, UserFormData, UserId};

/// Result of a fetch task, posted back to the store.
#[derive(Debug)]
enum FetchOutcome {
    Loaded {
        users: Vec<User>,
        fetched_at: DateTime<Utc>,
    },
    Failed(String),
    /// The task was dropped before it finished.
    Abandoned,
}

/// A detached fetch started by [`UserStore::start_fetch`].
///
/// Dropping the task without running it (or mid-request) still releases the store's
/// `loading` flag on the next [`UserStore::sync`].
#[derive(Debug)]
#[must_use = "the store stays loading until the task runs or is dropped"]
pub struct FetchUsersTask {
    fetcher: Arc<dyn UsersFetcher>,
    outcome_tx: Option<Sender<FetchOutcome>>,
}

impl FetchUsersTask {
    /// Perform the request and post the outcome to the store.
    pub async fn run(mut self) {
        let outcome = match self.fetcher.fetch_users().await {
            Ok(users) => {
                info!("Fetched {} users", users.len());
                FetchOutcome::Loaded {
                    users,
                    fetched_at: Utc::now(),
                }
            }
            Err(err) => {
                error!("Failed to fetch users: {err}");
                FetchOutcome::Failed(err.to_string())
            }
        };
        self.post(outcome);
    }

    fn post(&mut self, outcome: FetchOutcome) {
        if let Some(tx) = self.outcome_tx.take()
            && tx.send(outcome).is_err()
        {
            debug!("User store dropped before fetch outcome arrived");
        }
    }
}

impl Drop for FetchUsersTask {
    fn drop(&mut self) {
        if self.outcome_tx.is_some() {
            warn!("Fetch task dropped before completion");
            self.post(FetchOutcome::Abandoned);
        }
    }
}

/// The session's user roster.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    last_fetch: Option<DateTime<Utc>>,
    fetcher: Arc<dyn UsersFetcher>,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl UserStore {
    pub fn new(fetcher: Arc<dyn UsersFetcher>) -> Self {
        let (outcome_tx, outcome_rx) = flume::unbounded();

        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            last_fetch: None,
            fetcher,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Store fetching from the configured HTTP endpoint.
    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(Arc::new(HttpUsersFetcher::from_config(config)))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared when a new fetch starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// Identifier the next created user will get: one past the current maximum, or 1.
    pub fn next_id(&self) -> UserId {
        self.users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Fetch the full collection and replace `users` with it.
    ///
    /// Failures never escape: they land in [`UserStore::error`] and leave `users`
    /// untouched. Does nothing if a detached fetch is already outstanding.
    pub async fn fetch_users(&mut self) {
        let Some(task) = self.start_fetch() else {
            return;
        };
        task.run().await;
        self.sync();
    }

    /// Enter the loading state and hand back the request to run.
    ///
    /// Outcomes already posted (including a cancelled `fetch_users`) are applied first.
    pub fn start_fetch(&mut self) -> Option<FetchUsersTask> {
        self.sync();
        if self.loading {
            warn!("Users fetch already in flight, ignoring new request");
            return None;
        }

        info!("Fetching users");
        self.loading = true;
        self.error = None;

        Some(FetchUsersTask {
            fetcher: Arc::clone(&self.fetcher),
            outcome_tx: Some(self.outcome_tx.clone()),
        })
    }

    /// Apply every fetch outcome posted since the last call. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded { users, fetched_at } => {
                self.users = users;
                self.last_fetch = Some(fetched_at);
            }
            FetchOutcome::Failed(message) => {
                self.error = Some(message);
            }
            FetchOutcome::Abandoned => {}
        }
        self.loading = false;
    }

    /// Append a new user with the next free identifier. Returns that identifier.
    pub fn add_user(&mut self, data: UserFormData) -> UserId {
        let id = self.next_id();
        self.users.push(data.into_user(id));
        debug!("Added user {id}");
        id
    }

    /// Overwrite the editable fields of user `id` in place.
    ///
    /// Returns the updated record, or `None` (and changes nothing) if no user has that id.
    pub fn update_user(&mut self, id: UserId, data: UserFormData) -> Option<&User> {
        let Some(user) = self.users.iter_mut().find(|user| user.id == id) else {
            debug!("update_user: no user with id {id}");
            return None;
        };
        user.apply(data);
        Some(&*user)
    }

    /// Remove user `id`, returning the removed record if there was one.
    pub fn delete_user(&mut self, id: UserId) -> Option<User> {
        let Some(index) = self.users.iter().position(|user| user.id == id) else {
            debug!("delete_user: no user with id {id}");
            return None;
        };
        Some(self.users.remove(index))
    }

    pub fn get_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}
