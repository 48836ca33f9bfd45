use crate::error::MetadataError;

/// Environment variable holding the OMDb API key.
pub const API_KEY_ENV: &str = "REEL_OMDB_API_KEY";

/// Where the API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the settings file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// An OMDb API key and its provenance.
#[derive(Clone)]
pub struct ApiKey {
    value: String,
    source: KeySource,
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &self.masked())
            .field("source", &self.source)
            .finish()
    }
}

impl ApiKey {
    pub fn new(value: impl Into<String>, source: KeySource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// Resolve the key. Priority: env var > settings file.
    ///
    /// `from_config` is the `[omdb] api_key` value, if the settings file has one.
    pub fn resolve(from_config: Option<&str>) -> Result<Self, MetadataError> {
        Self::resolve_with(std::env::var(API_KEY_ENV).ok().as_deref(), from_config)
    }

    /// Same as [`ApiKey::resolve`], with the environment value passed in.
    pub fn resolve_with(
        from_env: Option<&str>,
        from_config: Option<&str>,
    ) -> Result<Self, MetadataError> {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        if let Some(v) = non_empty(from_env) {
            return Ok(Self::new(v, KeySource::EnvVar(API_KEY_ENV)));
        }
        if let Some(v) = non_empty(from_config) {
            return Ok(Self::new(v, KeySource::ConfigFile));
        }
        Err(MetadataError::Config(format!(
            "Missing OMDb API key. Set {API_KEY_ENV} or run 'reel config set-key <KEY>'"
        )))
    }

    /// Determine where the key would come from without failing.
    pub fn source_of(from_env: Option<&str>, from_config: Option<&str>) -> KeySource {
        match Self::resolve_with(from_env, from_config) {
            Ok(key) => key.source,
            Err(_) => KeySource::Missing,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &KeySource {
        &self.source
    }

    /// First two characters followed by `****`, for display.
    pub fn masked(&self) -> String {
        let prefix: String = self.value.chars().take(2).collect();
        if self.value.chars().count() <= 2 {
            "****".to_string()
        } else {
            format!("{prefix}****")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_config() {
        let key = ApiKey::resolve_with(Some("envkey"), Some("filekey")).unwrap();
        assert_eq!(key.value(), "envkey");
        assert_eq!(key.source(), &KeySource::EnvVar(API_KEY_ENV));
    }

    #[test]
    fn blank_env_falls_through_to_config() {
        let key = ApiKey::resolve_with(Some("  "), Some("filekey")).unwrap();
        assert_eq!(key.value(), "filekey");
        assert_eq!(key.source(), &KeySource::ConfigFile);
    }

    #[test]
    fn missing_key_is_config_error() {
        assert!(matches!(
            ApiKey::resolve_with(None, None),
            Err(MetadataError::Config(_))
        ));
        assert_eq!(ApiKey::source_of(None, Some("")), KeySource::Missing);
    }

    #[test]
    fn masking_hides_the_tail() {
        assert_eq!(ApiKey::new("fcf6b17a", KeySource::ConfigFile).masked(), "fc****");
        assert_eq!(ApiKey::new("ab", KeySource::ConfigFile).masked(), "****");
        assert!(!format!("{:?}", ApiKey::new("secret", KeySource::ConfigFile)).contains("secret"));
    }
}
