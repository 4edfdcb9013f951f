/**
 * API Client
 *
 * Thin reqwest wrappers over the REST API, one method per user-facing
 * operation. Every call resolves to the `Action` the reducer consumes;
 * server-side failures become `Action::Errors` carrying the field-keyed
 * map, matching how the original client fed its store. Only transport and
 * persistence failures error out of the call itself.
 *
 * Authenticated calls take the token as stored, `"Bearer <jwt>"`, and send
 * it in the Authorization header verbatim.
 */

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde_json::{json, Map, Value};

use crate::client::session::decode_user;
use crate::client::state::Action;
use crate::client::token::TokenStore;

/// Failures that prevent a call from producing an action at all
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("token persistence failed: {0}")]
    TokenStore(#[from] std::io::Error),

    #[error("received a token that does not decode: {0}")]
    BadToken(#[from] jsonwebtoken::errors::Error),
}

/// HTTP client over the DevLink REST API
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// Turn a failed response into the error action the reducer expects
async fn error_action(response: Response) -> Action {
    let map = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| json!({ "error": "Request failed" }));
    Action::Errors(map)
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/users/register
    ///
    /// Success clears any stale error map; the new account logs in
    /// separately, as in the original flow.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Action, ClientError> {
        let response = self
            .http
            .post(self.url("/api/users/register"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::ClearErrors)
        } else {
            Ok(error_action(response).await)
        }
    }

    /// POST /api/users/login
    ///
    /// On success the returned token is persisted and decoded; the embedded
    /// identity becomes the current user.
    pub async fn login<S: TokenStore>(
        &self,
        store: &S,
        email: &str,
        password: &str,
    ) -> Result<Action, ClientError> {
        let response = self
            .http
            .post(self.url("/api/users/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(error_action(response).await);
        }

        let body: Value = response.json().await?;
        let token = body["token"].as_str().unwrap_or_default().to_string();

        store.save(&token)?;
        let user = decode_user(&token)?;

        Ok(Action::SetCurrentUser(user))
    }

    /// Drop the persisted token and reset the session
    pub fn logout<S: TokenStore>(&self, store: &S) -> Result<Action, ClientError> {
        store.clear()?;
        Ok(Action::ClearCurrentUser)
    }

    /// GET /api/profile
    ///
    /// A missing profile resolves to an empty payload rather than an error;
    /// the dashboard renders "create one" from it.
    pub async fn current_profile(&self, token: &str) -> Result<Action, ClientError> {
        let response = self
            .http
            .get(self.url("/api/profile"))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(Action::Profile(Value::Object(Map::new())))
        }
    }

    /// GET /api/profile/handle/{handle}
    ///
    /// An unknown handle resolves to a null payload ("profile not found").
    pub async fn profile_by_handle(&self, handle: &str) -> Result<Action, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/profile/handle/{handle}")))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(Action::Profile(Value::Null))
        }
    }

    /// GET /api/profile/all
    pub async fn profiles(&self) -> Result<Action, ClientError> {
        let response = self.http.get(self.url("/api/profile/all")).send().await?;

        if response.status().is_success() {
            Ok(Action::Profiles(response.json().await?))
        } else {
            Ok(Action::Profiles(Value::Null))
        }
    }

    /// POST /api/profile - create or update the caller's profile
    pub async fn create_profile(&self, token: &str, fields: &Value) -> Result<Action, ClientError> {
        let response = self
            .http
            .post(self.url("/api/profile"))
            .header(AUTHORIZATION, token)
            .json(fields)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(error_action(response).await)
        }
    }

    /// POST /api/profile/experience
    pub async fn add_experience(&self, token: &str, entry: &Value) -> Result<Action, ClientError> {
        let response = self
            .http
            .post(self.url("/api/profile/experience"))
            .header(AUTHORIZATION, token)
            .json(entry)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(error_action(response).await)
        }
    }

    /// POST /api/profile/education
    pub async fn add_education(&self, token: &str, entry: &Value) -> Result<Action, ClientError> {
        let response = self
            .http
            .post(self.url("/api/profile/education"))
            .header(AUTHORIZATION, token)
            .json(entry)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(error_action(response).await)
        }
    }

    /// DELETE /api/profile/experience/{id}
    pub async fn delete_experience(&self, token: &str, id: &str) -> Result<Action, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/profile/experience/{id}")))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(error_action(response).await)
        }
    }

    /// DELETE /api/profile/education/{id}
    pub async fn delete_education(&self, token: &str, id: &str) -> Result<Action, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/profile/education/{id}")))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Action::Profile(response.json().await?))
        } else {
            Ok(error_action(response).await)
        }
    }

    /// DELETE /api/profile - delete the account and end the session
    pub async fn delete_account<S: TokenStore>(
        &self,
        store: &S,
        token: &str,
    ) -> Result<Action, ClientError> {
        let response = self
            .http
            .delete(self.url("/api/profile"))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if response.status().is_success() {
            store.clear()?;
            Ok(Action::ClearCurrentUser)
        } else {
            Ok(error_action(response).await)
        }
    }
}
