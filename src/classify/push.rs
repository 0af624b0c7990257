use crate::config::HookConfig;
use crate::error::HookError;
use crate::events::{RepositoryIdentity, RouterMessage};
use crate::webhook_payloads::github::GithubPushWebhookPayload;

use super::{Decision, IgnoreReason};

/// Recognized image file extensions, matched case-insensitively against the
/// end of a path. Entries are expected in normalized `.ext` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExtensions(Vec<String>);

impl ImageExtensions {
    pub fn new(extensions: Vec<String>) -> Self {
        Self(extensions)
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = path.as_bytes();

        self.0.iter().any(|ext| {
            let ext = ext.as_bytes();
            path.len() >= ext.len() && path[path.len() - ext.len()..].eq_ignore_ascii_case(ext)
        })
    }
}

pub struct PushClassifier {
    extensions: ImageExtensions,
    github_api_url: String,
}

impl PushClassifier {
    pub fn new(extensions: ImageExtensions, github_api_url: impl Into<String>) -> Self {
        Self {
            extensions,
            github_api_url: github_api_url.into(),
        }
    }

    pub fn from_config(config: &HookConfig) -> Self {
        Self::new(
            ImageExtensions::new(config.image_extensions.clone()),
            &config.github_api_url,
        )
    }

    /// Branch check first, then the image scan. Identity fields are only
    /// required once the push is going to be dispatched.
    pub fn classify(&self, payload: &GithubPushWebhookPayload) -> Result<Decision, HookError> {
        if payload.reference != payload.default_branch_ref() {
            return Ok(Decision::Ignore(IgnoreReason::NonDefaultBranch));
        }

        let touches_image = payload
            .commits
            .iter()
            .flat_map(|commit| commit.touched_paths())
            .any(|path| self.extensions.matches(path));

        if !touches_image {
            return Ok(Decision::Ignore(IgnoreReason::NoImagesTouched));
        }

        let identity = RepositoryIdentity::from_push(payload, &self.github_api_url)?;
        Ok(Decision::Dispatch(RouterMessage::from(identity)))
    }
}
