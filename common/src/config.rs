use once_cell::sync::OnceCell;
use std::env;

/// Default cap on displayed program output, in characters.
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub max_output_len: usize,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Loads `env_path` (if it exists) into the process environment and builds the
    /// global configuration. Later calls return the first configuration.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(Self::from_env)
    }

    /// Builds a configuration from the current environment without touching the singleton.
    pub fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "judge-feedback".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/feedback.log".into());
        let max_output_len = env::var("MAX_OUTPUT_LEN")
            .ok()
            .and_then(|n| n.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(DEFAULT_MAX_OUTPUT_LEN);

        Config {
            project_name,
            log_level,
            log_file,
            max_output_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        env::remove_var("PROJECT_NAME");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FILE");
        env::set_var("MAX_OUTPUT_LEN", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.project_name, "judge-feedback");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "logs/feedback.log");
        assert_eq!(config.max_output_len, DEFAULT_MAX_OUTPUT_LEN);

        env::set_var("MAX_OUTPUT_LEN", "250");
        assert_eq!(Config::from_env().max_output_len, 250);

        env::set_var("MAX_OUTPUT_LEN", "0");
        assert_eq!(Config::from_env().max_output_len, DEFAULT_MAX_OUTPUT_LEN);

        env::remove_var("MAX_OUTPUT_LEN");
    }
}
