use super::{GithubCommit, GithubInstallation, GithubRepository};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubPushWebhookPayload {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub commits: Vec<GithubCommit>,
    pub repository: GithubRepository,
    #[serde(default)]
    pub installation: Option<GithubInstallation>,
}

impl GithubPushWebhookPayload {
    /// The fully qualified ref of the repository's default branch.
    pub fn default_branch_ref(&self) -> String {
        format!("refs/heads/{}", self.repository.default_branch)
    }
}
