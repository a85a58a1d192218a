use crate::error::{FlashError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_EXPORT_FILE: &str = "flashcards.json";
const DEFAULT_PROMPT: &str = "Return a list of flashcards for the topic: {topic}. \
Write one flashcard per line in the form 'term: definition'. \
Do not number the lines and do not add any other text.";

/// Keys accepted by `flashgen config`.
pub const CONFIG_KEYS: &[&str] = &["api-endpoint", "model", "api-key-env", "prompt", "export-file"];

/// Configuration for flashgen, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashConfig {
    /// Base URL of an OpenAI-compatible API (the part before `/chat/completions`)
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key. The key itself
    /// is never written to disk.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Prompt sent to the model; `{topic}` is replaced with the user's topic
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// File name used by `save` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            prompt: default_prompt(),
            export_file: default_export_file(),
        }
    }
}

impl FlashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| FlashError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The API key, read from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        let value = match key {
            "api-endpoint" => &self.api_endpoint,
            "model" => &self.model,
            "api-key-env" => &self.api_key_env,
            "prompt" => &self.prompt,
            "export-file" => &self.export_file,
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FlashError::Config(format!("{} cannot be empty", key)));
        }

        let slot = match key {
            "api-endpoint" => &mut self.api_endpoint,
            "model" => &mut self.model,
            "api-key-env" => &mut self.api_key_env,
            "prompt" => {
                if !value.contains("{topic}") {
                    return Err(FlashError::Config(
                        "prompt must contain the {topic} placeholder".to_string(),
                    ));
                }
                &mut self.prompt
            }
            "export-file" => &mut self.export_file,
            other => return Err(unknown_key(other)),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> FlashError {
    FlashError::Config(format!(
        "unknown key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
