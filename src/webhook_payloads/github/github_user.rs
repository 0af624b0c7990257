#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}
