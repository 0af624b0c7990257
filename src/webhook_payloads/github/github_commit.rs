#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default)]
pub struct GithubCommit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
}

impl GithubCommit {
    /// Every path this commit added, modified or removed.
    pub fn touched_paths(&self) -> impl Iterator<Item = &str> {
        self.added
            .iter()
            .chain(&self.modified)
            .chain(&self.removed)
            .map(String::as_str)
    }
}
