use reqwest::Method;
use store::User;
use tokio_util::sync::CancellationToken;

use super::USER_PROFILE_URL;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::schema::{ProfileUpdate, UserEnvelope};

impl ApiClient {
    /// `GET api/user`.
    pub async fn current_user(&self, cancel: Option<&CancellationToken>) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.get_json(USER_PROFILE_URL, cancel).await?;
        Ok(envelope.user)
    }

    /// `PUT api/user`.
    pub async fn update_user(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_json(Method::PUT, USER_PROFILE_URL, update, None)
            .await?;
        Ok(())
    }
}
