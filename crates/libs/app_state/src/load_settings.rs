use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;

/// Loads settings from `config/settings.yaml`, with `APP__`-prefixed
/// environment variables (and `.env`) overriding file values. Secrets are
/// only ever supplied through the environment.
pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv first so the env source sees .env values.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    Ok(raw_settings.into())
}
