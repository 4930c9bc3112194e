//! Secret resolution for the pipelines.
//!
//! The execution environment hands out API keys by name. Both pipelines
//! consume the same capability through [`SecretProvider`], whether the
//! values come from the process environment or from an in-memory map.

use std::collections::HashMap;

/// Resolves a named secret to its value, or `None` when it is not available.
///
/// Implementations must treat empty values as absent.
pub trait SecretProvider {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<T: SecretProvider + ?Sized> SecretProvider for &T {
    fn resolve(&self, name: &str) -> Option<String> {
        (**self).resolve(name)
    }
}

/// Reads secrets from environment variables.
///
/// A lookup for `soccerApiKey` first tries the variable `soccerApiKey` and
/// then `SOCCER_API_KEY`, so both sandbox-style and shell-style names work.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretProvider for EnvSecrets {
    fn resolve(&self, name: &str) -> Option<String> {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        non_empty(name).or_else(|| {
            let env_key = to_env_key(name);
            if env_key == name {
                None
            } else {
                non_empty(&env_key)
            }
        })
    }
}

/// Fixed set of secrets held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret, replacing any previous value under the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretProvider for StaticSecrets {
    fn resolve(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticSecrets {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Converts a camelCase secret name into SCREAMING_SNAKE_CASE.
///
/// Names that are already upper case pass through unchanged.
pub fn to_env_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            key.push('_');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        key.push(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_to_env_key() {
        assert_eq!(to_env_key("soccerApiKey"), "SOCCER_API_KEY");
        assert_eq!(to_env_key("RAPIDAPI_KEY"), "RAPIDAPI_KEY");
        assert_eq!(to_env_key("apiKey2"), "API_KEY2");
        assert_eq!(to_env_key("key"), "KEY");
    }

    #[test]
    fn test_static_secrets_resolve() {
        let secrets = StaticSecrets::new().with("soccerApiKey", "abc123");
        assert_eq!(secrets.resolve("soccerApiKey"), Some("abc123".to_string()));
        assert_eq!(secrets.resolve("RAPIDAPI_KEY"), None);
    }

    #[test]
    fn test_static_secrets_empty_value_is_absent() {
        let secrets: StaticSecrets = [("soccerApiKey", "")].into_iter().collect();
        assert_eq!(secrets.resolve("soccerApiKey"), None);
    }

    #[test]
    fn test_provider_by_reference() {
        fn lookup(provider: impl SecretProvider) -> Option<String> {
            provider.resolve("name")
        }
        let secrets = StaticSecrets::new().with("name", "value");
        assert_eq!(lookup(&secrets), Some("value".to_string()));
    }

    #[test]
    #[serial]
    fn test_env_secrets_exact_name() {
        unsafe {
            std::env::set_var("fixtureOracleTestKey", "exact");
            std::env::remove_var("FIXTURE_ORACLE_TEST_KEY");
        }

        assert_eq!(
            EnvSecrets.resolve("fixtureOracleTestKey"),
            Some("exact".to_string())
        );

        unsafe {
            std::env::remove_var("fixtureOracleTestKey");
        }
    }

    #[test]
    #[serial]
    fn test_env_secrets_snake_case_fallback() {
        unsafe {
            std::env::remove_var("fixtureOracleTestKey");
            std::env::set_var("FIXTURE_ORACLE_TEST_KEY", "snake");
        }

        assert_eq!(
            EnvSecrets.resolve("fixtureOracleTestKey"),
            Some("snake".to_string())
        );

        unsafe {
            std::env::remove_var("FIXTURE_ORACLE_TEST_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_env_secrets_missing_and_empty() {
        unsafe {
            std::env::set_var("FIXTURE_ORACLE_EMPTY_KEY", "");
        }

        assert_eq!(EnvSecrets.resolve("FIXTURE_ORACLE_EMPTY_KEY"), None);
        assert_eq!(EnvSecrets.resolve("fixtureOracleNeverSet"), None);

        unsafe {
            std::env::remove_var("FIXTURE_ORACLE_EMPTY_KEY");
        }
    }
}
