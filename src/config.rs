use crate::error::AppError;
use std::env;

const DEFAULT_REGION: &str = "na1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var("RIOT_API_KEY").ok(), env::var("RIOT_REGION").ok())
    }

    fn from_vars(api_key: Option<String>, region: Option<String>) -> Result<Self, AppError> {
        let api_key = api_key.ok_or_else(|| {
            AppError::ConfigError(
                "league_trend needs RIOT_API_KEY set in the environment or a .env file"
                    .to_string(),
            )
        })?;

        Ok(Config {
            api_key,
            region: region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = Config::from_vars(None, Some("euw1".to_string()));

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn region_defaults_to_na1() {
        let config = Config::from_vars(Some("key".to_string()), None).unwrap();

        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn region_override_is_kept() {
        let config =
            Config::from_vars(Some("key".to_string()), Some("kr".to_string())).unwrap();

        assert_eq!(config.region, "kr");
    }
}
