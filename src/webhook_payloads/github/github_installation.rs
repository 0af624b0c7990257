#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubInstallation {
    pub id: i64,
}
