use store::{Action, LoadingScope};
use tokio_util::sync::CancellationToken;

use super::report;
use crate::client::ApiClient;
use crate::messages::Message;

/// Fetch the users list into the users slice.
pub async fn load_users(
    client: &ApiClient,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    dispatch(Action::ShowLoading(LoadingScope::Users));
    let result = client.list_users(Some(cancel)).await;
    dispatch(Action::HideLoading(LoadingScope::Users));

    match result {
        Ok(users) => {
            dispatch(Action::SaveUsers(users));
            true
        }
        Err(e) => {
            report(dispatch, "Load users", &e, Message::SystemError);
            false
        }
    }
}

/// Delete a user by email. On success the entry leaves the cached list and
/// the list is refetched under `cancel`; on failure the list is untouched.
pub async fn delete_user(
    client: &ApiClient,
    email: &str,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    if email.is_empty() {
        return false;
    }
    match client.delete_user(email).await {
        Ok(()) => {
            tracing::info!("Deleted user {}", email);
            dispatch(Action::success(Message::DeleteSuccess.text()));
            dispatch(Action::RemoveUser(email.to_string()));
            load_users(client, cancel, dispatch).await;
            true
        }
        Err(e) => {
            report(dispatch, "Delete user", &e, Message::DeleteFailed);
            false
        }
    }
}
