use store::{Action, LoadingScope, User};
use tokio_util::sync::CancellationToken;

use super::report;
use crate::client::ApiClient;
use crate::messages::Message;
use crate::schema::ProfileUpdate;

/// Fetch the profile and refresh the session with it.
pub async fn load_profile(
    client: &ApiClient,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> Option<User> {
    dispatch(Action::ShowLoading(LoadingScope::Page));
    let result = client.current_user(Some(cancel)).await;
    dispatch(Action::HideLoading(LoadingScope::Page));

    match result {
        Ok(user) => {
            dispatch(Action::UpdateUser(user.clone()));
            Some(user)
        }
        Err(e) => {
            report(dispatch, "Load profile", &e, Message::SystemError);
            None
        }
    }
}

/// Save the profile, then reload it under `cancel` so the session reflects
/// the backend.
pub async fn save_profile(
    client: &ApiClient,
    update: &ProfileUpdate,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> Option<User> {
    if let Err(e) = client.update_user(update).await {
        report(dispatch, "Save profile", &e, Message::SystemError);
        return None;
    }
    tracing::info!("Profile updated for {}", update.email);
    dispatch(Action::success(Message::UpdateSuccess.text()));
    load_profile(client, cancel, dispatch).await
}
