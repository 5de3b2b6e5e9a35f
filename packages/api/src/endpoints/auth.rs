use reqwest::Method;
use store::User;

use super::{LOGIN_URL, REGISTER_URL};
use crate::client::{read_json, ApiClient};
use crate::error::ApiError;
use crate::schema::{Credentials, SignUp, UserEnvelope};

impl ApiClient {
    /// `POST api/login`.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response = self
            .send_json(Method::POST, LOGIN_URL, credentials, None)
            .await?;
        let envelope: UserEnvelope = read_json(response, None).await?;
        Ok(envelope.user)
    }

    /// `POST api/users`. The response body is not used.
    pub async fn register(&self, form: &SignUp) -> Result<(), ApiError> {
        self.send_json(Method::POST, REGISTER_URL, form, None).await?;
        Ok(())
    }
}
