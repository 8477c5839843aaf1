use serde::Deserialize;

use crate::infra::config::{AppConfig, AssistantConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub assistant: Option<FileAssistantConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(assistant) = self.assistant {
            assistant.merge_into(&mut config.assistant);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAssistantConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
}

impl FileAssistantConfig {
    fn merge_into(self, config: &mut AssistantConfig) {
        if let Some(model) = self.model {
            config.model = model;
        }

        if let Some(base_url) = self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }

        if let Some(api_key_env) = self.api_key_env {
            config.api_key_env = api_key_env;
        }
    }
}
