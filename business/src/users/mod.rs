//! Users domain module.
//!
//! - `model`: the `User` record and its editable fields
//! - `api`: network access to the users endpoint, behind the `UsersFetcher` seam
//! - `store`: the session's roster and fetch status

pub mod api;
pub mod model;
pub mod store;

pub use api::{ApiResult, HttpUsersFetcher, UsersApiError, UsersFetcher, list_users};
pub use model::{User, UserFormData, UserId};
pub use store::{FetchUsersTask, UserStore};
