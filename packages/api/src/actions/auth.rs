use store::Action;

use super::{report, report_generic};
use crate::client::ApiClient;
use crate::messages::Message;
use crate::schema::{Credentials, SignUp};

/// Log in and populate the session. Returns whether the session is now set.
pub async fn login(
    client: &ApiClient,
    credentials: &Credentials,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    match client.login(credentials).await {
        Ok(user) => {
            tracing::info!("Logged in as {}", user.email);
            dispatch(Action::Login(user));
            true
        }
        Err(e) => {
            report(dispatch, "Login", &e, Message::LoginFailed);
            false
        }
    }
}

/// Create an account. The user still has to log in afterwards.
pub async fn sign_up(client: &ApiClient, form: &SignUp, dispatch: &mut impl FnMut(Action)) -> bool {
    match client.register(form).await {
        Ok(()) => {
            tracing::info!("Registered {}", form.email);
            dispatch(Action::success(Message::RegisterUserSuccess.text()));
            true
        }
        Err(e) => {
            report_generic(dispatch, "Sign up", &e, Message::SystemError);
            false
        }
    }
}

pub fn logout(dispatch: &mut impl FnMut(Action)) {
    tracing::info!("Logged out");
    dispatch(Action::Logout);
    dispatch(Action::info(Message::LoggedOut.text()));
}
