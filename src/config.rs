use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve canned transcription/NLU responses instead of calling Watson
    #[serde(default)]
    pub use_mock: bool,

    /// Watson Speech to Text API key
    pub watson_stt_apikey: Option<String>,

    /// Watson Speech to Text instance URL
    #[serde(default = "default_stt_url")]
    pub watson_stt_url: String,

    /// Speech recognition model
    #[serde(default = "default_stt_model")]
    pub watson_stt_model: String,

    /// Watson NLU API key
    pub watson_nlu_apikey: Option<String>,

    /// Watson NLU instance URL
    #[serde(default = "default_nlu_url")]
    pub watson_nlu_url: String,

    /// Custom entity model; empty uses the service default
    #[serde(default)]
    pub watson_nlu_model_id: String,

    /// NLU API version date
    #[serde(default = "default_nlu_version")]
    pub watson_nlu_version: String,

    /// Language of the feedback text
    #[serde(default = "default_nlu_language")]
    pub nlu_language: String,

    /// Maximum request body size, audio uploads included
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Vehicle catalog JSON; the built-in table is used when unset
    pub catalog_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_stt_url() -> String {
    "https://api.us-south.speech-to-text.watson.cloud.ibm.com".to_string()
}

fn default_stt_model() -> String {
    "pt-BR_NarrowbandModel".to_string()
}

fn default_nlu_url() -> String {
    "https://api.us-south.natural-language-understanding.watson.cloud.ibm.com".to_string()
}

fn default_nlu_version() -> String {
    "2020-09-13".to_string()
}

fn default_nlu_language() -> String {
    "pt".to_string()
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Watson credentials are required unless canned responses are used
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.use_mock {
            return Ok(());
        }
        if self.watson_stt_apikey.as_deref().unwrap_or_default().is_empty() {
            anyhow::bail!("WATSON_STT_APIKEY is required when USE_MOCK is off");
        }
        if self.watson_nlu_apikey.as_deref().unwrap_or_default().is_empty() {
            anyhow::bail!("WATSON_NLU_APIKEY is required when USE_MOCK is off");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
