//! API configuration resolved from command-line flags and the environment.

use crate::{
    cli::types::Region, error::ClansError, Result, API_URL_ENV_VAR, APPLICATION_ID_ENV_VAR,
    LANGUAGE_ENV_VAR, REGION_ENV_VAR,
};

/// Everything the request gateway needs to reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub application_id: String,
    pub region: Region,
    pub language: Option<String>,
    /// Base URL without trailing slash, e.g. `https://api.wotblitz.eu/wotb`.
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve configuration from flags, falling back to environment variables.
    pub fn resolve(
        application_id: Option<String>,
        region: Option<Region>,
        language: Option<String>,
    ) -> Result<Self> {
        Self::resolve_with(application_id, region, language, |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`ApiConfig::resolve`] with a custom variable lookup.
    pub fn resolve_with<F>(
        application_id: Option<String>,
        region: Option<Region>,
        language: Option<String>,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let application_id = application_id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| lookup(APPLICATION_ID_ENV_VAR))
            .ok_or_else(|| ClansError::MissingApplicationId {
                env_var: APPLICATION_ID_ENV_VAR.to_string(),
            })?;

        let region = match region {
            Some(region) => region,
            None => lookup(REGION_ENV_VAR)
                .map(|r| r.parse::<Region>())
                .transpose()?
                .unwrap_or_default(),
        };

        let language = language.or_else(|| lookup(LANGUAGE_ENV_VAR));

        let base_url = lookup(API_URL_ENV_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| region.base_url());

        Ok(Self {
            application_id,
            region,
            language,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_from_flags() {
        let config = ApiConfig::resolve_with(
            Some("abc123".to_string()),
            Some(Region::Asia),
            Some("en".to_string()),
            env_from(&[]),
        )
        .unwrap();

        assert_eq!(config.application_id, "abc123");
        assert_eq!(config.region, Region::Asia);
        assert_eq!(config.language.as_deref(), Some("en"));
        assert_eq!(config.base_url, "https://api.wotblitz.asia/wotb");
    }

    #[test]
    fn test_resolve_from_env() {
        let config = ApiConfig::resolve_with(
            None,
            None,
            None,
            env_from(&[
                (APPLICATION_ID_ENV_VAR, "from-env"),
                (REGION_ENV_VAR, "na"),
                (LANGUAGE_ENV_VAR, "de"),
            ]),
        )
        .unwrap();

        assert_eq!(config.application_id, "from-env");
        assert_eq!(config.region, Region::Na);
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.base_url, "https://api.wotblitz.com/wotb");
    }

    #[test]
    fn test_flags_override_env() {
        let config = ApiConfig::resolve_with(
            Some("flag".to_string()),
            Some(Region::Eu),
            None,
            env_from(&[(APPLICATION_ID_ENV_VAR, "env"), (REGION_ENV_VAR, "asia")]),
        )
        .unwrap();

        assert_eq!(config.application_id, "flag");
        assert_eq!(config.region, Region::Eu);
    }

    #[test]
    fn test_missing_application_id() {
        let result = ApiConfig::resolve_with(None, None, None, env_from(&[]));

        match result.unwrap_err() {
            ClansError::MissingApplicationId { env_var } => {
                assert_eq!(env_var, APPLICATION_ID_ENV_VAR);
            }
            _ => panic!("Expected MissingApplicationId error"),
        }
    }

    #[test]
    fn test_blank_application_id_is_missing() {
        let result = ApiConfig::resolve_with(
            Some("  ".to_string()),
            None,
            None,
            env_from(&[(APPLICATION_ID_ENV_VAR, "")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_region_env() {
        let result = ApiConfig::resolve_with(
            Some("id".to_string()),
            None,
            None,
            env_from(&[(REGION_ENV_VAR, "moon")]),
        );
        assert!(matches!(result, Err(ClansError::InvalidRegion { .. })));
    }

    #[test]
    fn test_api_url_override_strips_trailing_slash() {
        let config = ApiConfig::resolve_with(
            Some("id".to_string()),
            None,
            None,
            env_from(&[(API_URL_ENV_VAR, "http://127.0.0.1:8080/wotb/")]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:8080/wotb");
        assert_eq!(config.region, Region::Eu);
    }
}
