use crate::{
    ApiSettings, BaseModel, LimitSettings, LoggingSettings, RawProviderSettings, RawSettings,
    SecretSettings,
};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub provider: ProviderSettings,
    pub limits: LimitSettings,
    pub models: Vec<BaseModel>,
    pub secrets: SecretSettings,
}

/// Provider settings with durations resolved and the base URL normalized.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub username: String,
    pub analysis_version: String,
    pub trainer_model: String,
    pub trainer_version: String,
    pub poll_interval: Duration,
    pub poll_timeout: Duration,
}

impl From<RawProviderSettings> for ProviderSettings {
    fn from(raw: RawProviderSettings) -> Self {
        Self {
            base_url: raw.base_url.trim_end_matches('/').to_string(),
            username: raw.username,
            analysis_version: raw.analysis_version,
            trainer_model: raw.trainer_model,
            trainer_version: raw.trainer_version,
            poll_interval: Duration::from_millis(raw.poll_interval_ms),
            poll_timeout: Duration::from_millis(raw.poll_timeout_ms),
        }
    }
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        Self {
            api: raw.api,
            logging: raw.logging,
            provider: raw.provider.into(),
            limits: raw.limits,
            models: raw.models,
            secrets: raw.secrets,
        }
    }
}
