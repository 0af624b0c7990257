use serde::{Deserialize, Serialize};

use crate::error::HookError;
use crate::webhook_payloads::github::GithubPushWebhookPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub installation_id: i64,
    pub owner: String,
    pub repo_name: String,
    pub clone_url: String,
    pub access_tokens_url: String,
}

impl RepositoryIdentity {
    /// Push deliveries carry no access token URL, so it is derived from
    /// `github_api_url`.
    pub fn from_push(
        payload: &GithubPushWebhookPayload,
        github_api_url: &str,
    ) -> Result<Self, HookError> {
        let installation_id = payload
            .installation
            .as_ref()
            .map(|installation| installation.id)
            .ok_or_else(|| HookError::MalformedPayload {
                kind: "push",
                reason: "missing field `installation`".to_string(),
            })?;

        Ok(Self {
            installation_id,
            owner: payload.repository.owner.login.clone(),
            repo_name: payload.repository.name.clone(),
            clone_url: payload.repository.html_url.clone(),
            access_tokens_url: format!(
                "{}/installations/{}/access_tokens",
                github_api_url.trim_end_matches('/'),
                installation_id
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterMessage {
    pub installation_id: i64,
    pub owner: String,
    pub access_tokens_url: String,
    pub repo_name: String,
    pub clone_url: String,
}

impl From<RepositoryIdentity> for RouterMessage {
    fn from(identity: RepositoryIdentity) -> Self {
        RouterMessage {
            installation_id: identity.installation_id,
            owner: identity.owner,
            access_tokens_url: identity.access_tokens_url,
            repo_name: identity.repo_name,
            clone_url: identity.clone_url,
        }
    }
}
