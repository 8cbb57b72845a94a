//! User roster business layer: the session's user store and the confirm-before-delete flow.

mod config;
pub mod delete_confirm;
pub mod http;
mod test_utils;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use delete_confirm::{
    ButtonSeverity, ConfirmDecision, ConfirmDialog, DeleteConfirm, DialogAction, DialogIcon,
    NotificationSurface, PromptSurface, Toast, ToastSeverity,
};
pub use users::{
    ApiResult, FetchUsersTask, HttpUsersFetcher, User, UserFormData, UserId, UserStore,
    UsersApiError, UsersFetcher,
};
