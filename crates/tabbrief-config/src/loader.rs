//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; every setting has one.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.browser.devtools_endpoint, "http://localhost:9222");
        assert_eq!(config.model.language, "en");
        assert_eq!(config.model.max_prompt_chars, 60_000);
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [browser]
            devtools_endpoint = "http://127.0.0.1:9333"

            [model]
            name = "qwen2.5"
            language = "de"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.browser.devtools_endpoint, "http://127.0.0.1:9333");
        assert_eq!(config.model.name, "qwen2.5");
        assert_eq!(config.model.language, "de");
        // Unset fields keep their defaults.
        assert_eq!(config.model.endpoint, "http://localhost:11434");
    }

    #[test]
    fn test_zero_prompt_cap_allowed() {
        let config = ConfigLoader::load_str("[model]\nmax_prompt_chars = 0").unwrap();
        assert_eq!(config.model.max_prompt_chars, 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[model]").unwrap();
        writeln!(file, "name = \"phi4\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.model.name, "phi4");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigLoader::load(Path::new("/nonexistent/tabbrief.toml")).unwrap();
        assert_eq!(config.model.name, "llama3.2");
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: unique test-only env var, set and removed within this test
        unsafe {
            std::env::set_var("TABBRIEF_TEST_ENDPOINT", "http://host:1234");
        }
        let content = "[model]\nendpoint = \"${TABBRIEF_TEST_ENDPOINT}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.model.endpoint, "http://host:1234");
        unsafe {
            std::env::remove_var("TABBRIEF_TEST_ENDPOINT");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "[model]\nendpoint = \"${TABBRIEF_NONEXISTENT_VAR_9}\"";
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/tabbrief.toml");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/tabbrief.toml"));
    }
}
