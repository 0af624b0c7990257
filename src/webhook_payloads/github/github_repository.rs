use super::GithubUser;

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubRepository {
    pub name: String,
    pub html_url: String,
    pub default_branch: String,
    pub owner: GithubUser,
}
