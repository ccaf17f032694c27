//! AWS Cognito user pool client.
//!
//! Talks to the Cognito Identity Provider JSON API directly: every call is a
//! `POST` to the regional endpoint with the action named in `X-Amz-Target`.

use crate::config::CognitoConfig;
use crate::error::IdentityError;
use crate::provider::IdentityProvider;
use crate::registration::{AccountRegistration, IdentityUser, SignUpOutcome};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use rootcause::prelude::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const AMZ_JSON: &str = "application/x-amz-json-1.1";
const AMZ_TARGET: &str = "X-Amz-Target";

/// Cognito answers `GetUser` with these when the token is not a live session.
const ABSENT_USER_CODES: [&str; 2] = ["NotAuthorizedException", "UserNotFoundException"];

/// Cognito user pool client for a public app client.
#[derive(Clone)]
pub struct CognitoClient {
    http: reqwest::Client,
    endpoint: String,
    client_id: String,
}

impl CognitoClient {
    /// Creates a new client from configuration.
    pub fn new(config: &CognitoConfig) -> Result<Self, Report<IdentityError>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()
            .map_err(|e| IdentityError::Configuration {
                details: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            client_id: config.client_id().to_string(),
        })
    }

    /// Invokes a Cognito action and decodes the successful response.
    async fn call<Req, Resp>(&self, action: &str, body: &Req) -> Result<Resp, IdentityError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| IdentityError::InvalidResponse {
            details: format!("failed to encode {action} request: {e}"),
        })?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header(AMZ_TARGET, format!("{TARGET_PREFIX}.{action}"))
            .body(payload)
            .send()
            .await
            .map_err(|e| IdentityError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| IdentityError::Transport {
                details: e.to_string(),
            })?;

        if !status.is_success() {
            debug!(%status, action, "identity provider returned an error");
            return Err(parse_error_body(status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| IdentityError::InvalidResponse {
            details: format!("failed to decode {action} response: {e}"),
        })
    }
}

#[async_trait]
impl IdentityProvider for CognitoClient {
    #[instrument(skip_all, fields(username = %registration.username()))]
    async fn sign_up(
        &self,
        registration: &AccountRegistration,
    ) -> Result<SignUpOutcome, Report<IdentityError>> {
        let request = SignUpRequest::new(&self.client_id, registration);
        let outcome: SignUpOutcome = self.call("SignUp", &request).await?;

        debug!(
            user_sub = %outcome.user_sub,
            user_confirmed = outcome.user_confirmed,
            "account created"
        );

        Ok(outcome)
    }

    #[instrument(skip_all)]
    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<IdentityUser>, Report<IdentityError>> {
        let request = GetUserRequest { access_token };
        match self.call::<_, GetUserResponse>("GetUser", &request).await {
            Ok(response) => Ok(Some(response.into_user())),
            Err(e) if ABSENT_USER_CODES.iter().any(|code| e.is_rejection(code)) => {
                debug!(error = %e, "access token does not belong to a signed-in user");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Body of a `SignUp` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    user_attributes: Vec<AttributeType<'a>>,
}

impl<'a> SignUpRequest<'a> {
    fn new(client_id: &'a str, registration: &'a AccountRegistration) -> Self {
        Self {
            client_id,
            username: registration.username(),
            password: registration.password(),
            user_attributes: vec![AttributeType {
                name: "email",
                value: registration.email(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AttributeType<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserRequest<'a> {
    access_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserResponse {
    username: String,
    #[serde(default)]
    user_attributes: Vec<OwnedAttribute>,
}

impl GetUserResponse {
    fn into_user(self) -> IdentityUser {
        let email = self
            .user_attributes
            .into_iter()
            .find(|attribute| attribute.name == "email")
            .map(|attribute| attribute.value);

        IdentityUser {
            username: self.username,
            email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OwnedAttribute {
    name: String,
    #[serde(default)]
    value: String,
}

/// Error body returned by the Cognito JSON API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: String,
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

/// Turns a non-success response into an [`IdentityError`].
///
/// `__type` may be namespaced (`com.amazonaws...#UsernameExistsException`);
/// only the part after `#` is kept.
fn parse_error_body(status: u16, bytes: &[u8]) -> IdentityError {
    match serde_json::from_slice::<ErrorBody>(bytes) {
        Ok(body) => {
            let code = body
                .error_type
                .rsplit('#')
                .next()
                .unwrap_or(&body.error_type)
                .to_string();
            let message = body.message.unwrap_or_else(|| code.clone());
            IdentityError::Rejected { code, message }
        }
        Err(e) => IdentityError::InvalidResponse {
            details: format!("status {status} with unreadable error body: {e}"),
        },
    }
}
