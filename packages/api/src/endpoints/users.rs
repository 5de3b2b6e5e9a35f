use reqwest::Method;
use store::UserEntry;
use tokio_util::sync::CancellationToken;

use super::USERS_URL;
use crate::client::{read_optional_json, ApiClient};
use crate::error::ApiError;
use crate::schema::UsersPayload;

impl ApiClient {
    /// `GET api/users`. An empty or `null` body is an empty list.
    pub async fn list_users(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<UserEntry>, ApiError> {
        let builder = self.request(Method::GET, USERS_URL)?;
        let response = self.send(builder, cancel).await?;
        let payload: Option<UsersPayload> = read_optional_json(response, cancel).await?;
        Ok(UsersPayload::into_users(payload))
    }

    /// `DELETE api/users/{email}`.
    pub async fn delete_user(&self, email: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &[USERS_URL[0], USERS_URL[1], email], None)
            .await?;
        Ok(())
    }
}
