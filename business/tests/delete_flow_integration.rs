//! Integration tests for deleting users through the confirmation flow.

mod common;

use common::{FixedPrompt, ToastLog, UsersTestCtx, users_json};
use roster_business::{ConfirmDecision, DeleteConfirm, ToastSeverity};
use wiremock::ResponseTemplate;

async fn loaded_ctx() -> UsersTestCtx {
    let mut ctx = UsersTestCtx::new().await;
    ctx.mount_users(ResponseTemplate::new(200).set_body_json(users_json(&[1, 2, 3])))
        .await;
    ctx.store.fetch_users().await;
    assert_eq!(ctx.store.users().len(), 3);
    ctx
}

#[tokio::test]
async fn test_accepted_confirmation_deletes_and_notifies() {
    let mut ctx = loaded_ctx().await;
    let confirm = DeleteConfirm::new(FixedPrompt::new(ConfirmDecision::Accept), ToastLog::default());
    let user = ctx.store.get_user_by_id(2).cloned().expect("user 2 exists");

    let decision = confirm.show_delete_confirm(&user, || {
        ctx.store.delete_user(user.id);
    });

    assert_eq!(decision, ConfirmDecision::Accept);
    assert!(ctx.store.get_user_by_id(2).is_none());
    let ids: Vec<u64> = ctx.store.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);

    assert_eq!(confirm.prompt().asked.get(), 1);
    let message = confirm.prompt().last_message.borrow().clone();
    assert!(message.is_some_and(|m| m.contains("User 2")));

    let toasts = confirm.notifier().toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, ToastSeverity::Warn);
    assert_eq!(toasts[0].detail, "User 2 has been deleted");
}

#[tokio::test]
async fn test_rejected_confirmation_keeps_user() {
    let mut ctx = loaded_ctx().await;
    let confirm = DeleteConfirm::new(FixedPrompt::new(ConfirmDecision::Reject), ToastLog::default());
    let user = ctx.store.get_user_by_id(2).cloned().expect("user 2 exists");

    let decision = confirm.show_delete_confirm(&user, || {
        ctx.store.delete_user(user.id);
    });

    assert_eq!(decision, ConfirmDecision::Reject);
    assert_eq!(ctx.store.users().len(), 3);
    assert!(ctx.store.get_user_by_id(2).is_some());
    assert!(confirm.notifier().toasts.borrow().is_empty());
}

#[tokio::test]
async fn test_confirming_an_already_deleted_user_is_harmless() {
    let mut ctx = loaded_ctx().await;
    let confirm = DeleteConfirm::new(FixedPrompt::new(ConfirmDecision::Accept), ToastLog::default());
    let user = ctx.store.get_user_by_id(3).cloned().expect("user 3 exists");

    confirm.show_delete_confirm(&user, || {
        ctx.store.delete_user(user.id);
    });
    let after_first = ctx.store.users().to_vec();

    confirm.show_delete_confirm(&user, || {
        ctx.store.delete_user(user.id);
    });

    assert_eq!(ctx.store.users(), after_first.as_slice());
    assert_eq!(ctx.store.error(), None);
    assert_eq!(confirm.notifier().toasts.borrow().len(), 2);
}
