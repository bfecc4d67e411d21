use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from steady_mind.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub system: SystemConfig,
    pub analysis: AnalysisConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for the LLM provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    /// "openai", "keyword", or "auto" (use the LLM when a key is present)
    pub llm_provider: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub llm_timeout_secs: u64,
}

/// Analysis behavior knobs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Journal text longer than this is truncated before analysis
    pub max_text_chars: usize,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub http_bind: std::net::SocketAddr,
    pub openai_api_key: Option<String>,
    /// Refuse to start without an LLM provider instead of using keyword rules
    pub llm_strict: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "steady_mind=info".to_string(),
            http_bind: "127.0.0.1:8787"
                .parse()
                .expect("default bind address should parse"),
            openai_api_key: None,
            llm_strict: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig {
                llm_provider: "auto".to_string(),
                llm_model: "gpt-4o-mini".to_string(),
                llm_base_url: "https://api.openai.com/v1".to_string(),
                llm_timeout_secs: 20,
            },
            analysis: AnalysisConfig {
                temperature: 0.3,
                max_tokens: 500,
                max_text_chars: 4000,
            },
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses STEADY_MIND_CONFIG environment variable or defaults to "steady_mind.toml"
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit path, falling back to the usual lookup
    pub fn load_from(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        // Load environment variables with smart fallbacks:
        // 1) STEADY_ENV_FILE if set
        // 2) ./.env
        // 3) ../.env (repo root when running from crate dir)
        if let Ok(env_path) = std::env::var("STEADY_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            // Current directory .env
            let _ = dotenvy::from_path(".env");
            // Fallback to parent .env if core vars are still missing
            let core_present = std::env::var("OPENAI_API_KEY").is_ok()
                || std::env::var("STEADY_LLM_PROVIDER").is_ok()
                || std::env::var("STEADY_HTTP_BIND").is_ok();
            if !core_present {
                let _ = dotenvy::from_path("../.env");
            }
        }

        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => std::path::PathBuf::from(
                std::env::var("STEADY_MIND_CONFIG")
                    .unwrap_or_else(|_| "steady_mind.toml".to_string()),
            ),
        };

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!(
                "Config file {} not found, using defaults",
                config_path.display()
            );
            Self::default()
        };

        // Apply env overrides for the LLM provider (env-first)
        if let Ok(provider) = std::env::var("STEADY_LLM_PROVIDER") {
            config.system.llm_provider = provider;
        }
        if let Ok(model) = std::env::var("STEADY_LLM_MODEL") {
            config.system.llm_model = model;
        }
        if let Ok(base_url) = std::env::var("STEADY_LLM_BASE_URL") {
            config.system.llm_base_url = base_url;
        }

        // Load runtime configuration from environment variables
        config.runtime = RuntimeConfig::load_from_env();

        // Log env overrides for debugging (env-first confirmation)
        if std::env::var("STEADY_LLM_PROVIDER").is_ok() {
            tracing::debug!("STEADY_LLM_PROVIDER env override applied");
        }
        if std::env::var("STEADY_LLM_MODEL").is_ok() {
            tracing::debug!("STEADY_LLM_MODEL env override applied");
        }
        if std::env::var("STEADY_LLM_BASE_URL").is_ok() {
            tracing::debug!("STEADY_LLM_BASE_URL env override applied");
        }

        // Validate configuration

        if !config.system.llm_base_url.starts_with("http://")
            && !config.system.llm_base_url.starts_with("https://")
        {
            tracing::warn!(
                "LLM base URL '{}' doesn't start with http:// or https://",
                config.system.llm_base_url
            );
        }

        match config.system.llm_provider.as_str() {
            "openai" | "keyword" | "auto" => {}
            other => tracing::warn!("Unknown llm_provider '{}', auto-detection applies", other),
        }

        if !(0.0..=2.0).contains(&config.analysis.temperature) {
            tracing::warn!(
                "temperature {} outside 0.0..=2.0, clamping",
                config.analysis.temperature
            );
            config.analysis.temperature = config.analysis.temperature.clamp(0.0, 2.0);
        }

        if config.analysis.max_tokens == 0 {
            config.analysis.max_tokens = 500;
        }
        if config.analysis.max_text_chars == 0 {
            config.analysis.max_text_chars = 4000;
        }
        if config.system.llm_timeout_secs == 0 {
            config.system.llm_timeout_secs = 1;
        }

        Ok(config)
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        let mut cfg = Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "steady_mind=info".to_string()),
            http_bind: "127.0.0.1:8787"
                .parse()
                .expect("default bind address should parse"),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            llm_strict: std::env::var("STEADY_LLM_STRICT")
                .ok()
                .is_some_and(|v| v == "true" || v == "1"),
        };

        if let Ok(v) = std::env::var("STEADY_HTTP_BIND")
            && let Ok(bind) = v.parse::<std::net::SocketAddr>()
        {
            cfg.http_bind = bind;
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.system.llm_provider, "auto");
        assert_eq!(config.system.llm_model, "gpt-4o-mini");
        assert_eq!(config.system.llm_timeout_secs, 20);
        assert_eq!(config.analysis.temperature, 0.3);
        assert_eq!(config.analysis.max_tokens, 500);
        assert_eq!(config.analysis.max_text_chars, 4000);
        assert_eq!(config.runtime.http_bind.port(), 8787);
        assert!(!config.runtime.llm_strict);
    }

    #[test]
    fn test_parse_full_toml() {
        let content = r#"
            [system]
            llm_provider = "openai"
            llm_model = "gpt-4o"
            llm_base_url = "https://llm.internal/v1"
            llm_timeout_secs = 10

            [analysis]
            temperature = 0.5
            max_tokens = 256
            max_text_chars = 2000
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.system.llm_model, "gpt-4o");
        assert_eq!(config.system.llm_base_url, "https://llm.internal/v1");
        assert_eq!(config.analysis.max_tokens, 256);
        // runtime is never read from the file
        assert_eq!(config.runtime.http_bind.port(), 8787);
    }

    #[test]
    fn test_sections_are_required() {
        let content = r#"
            [system]
            llm_provider = "auto"
            llm_model = "gpt-4o-mini"
            llm_base_url = "https://api.openai.com/v1"
            llm_timeout_secs = 20
        "#;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config =
            Config::load_from(Some(std::path::Path::new("/nonexistent/steady_mind.toml"))).unwrap();
        assert_eq!(config.analysis.max_tokens, 500);
    }
}
