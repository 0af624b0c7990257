use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::Result;

pub const CONFIG_ENV: &str = "IMGBOT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "imgbot.yaml";

const DEFAULT_IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub listen_addr: String,
    pub image_extensions: Vec<String>,
    pub github_api_url: String,
    pub queue_capacity: usize,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            github_api_url: "https://api.github.com".to_string(),
            queue_capacity: 100,
        }
    }
}

impl HookConfig {
    /// Loads the file named by `IMGBOT_CONFIG`, falling back to
    /// `imgbot.yaml` and then to defaults when neither exists.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            Err(_) => {
                tracing::debug!("No configuration file found, using defaults");
                Self::default().normalized()
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        tracing::info!("Loading configuration from {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: HookConfig = serde_yaml::from_str(content)?;
        config.normalized()
    }

    fn normalized(mut self) -> Result<Self> {
        let mut extensions = Vec::with_capacity(self.image_extensions.len());

        for ext in &self.image_extensions {
            let ext = ext.trim().to_ascii_lowercase();
            let ext = ext.trim_start_matches('.');
            if ext.is_empty() {
                bail!("Image extensions must not be empty");
            }

            let ext = format!(".{ext}");
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }

        if self.queue_capacity == 0 {
            bail!("queue_capacity must be at least 1");
        }

        self.image_extensions = extensions;
        Ok(self)
    }
}
