use serde::Deserialize;

/// Which recommender answers `POST /api/mood-match`
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Mood lexicon + genre discovery
    #[default]
    Heuristic,
    /// LLM proposes titles, metadata provider resolves them
    Generative,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key. Optional at startup; routes that need it fail per request.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    #[serde(default)]
    pub recommendation_mode: RecommendationMode,

    /// API key for the OpenAI-compatible LLM endpoint (generative mode only)
    #[serde(default)]
    pub llm_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_llm_api_url")]
    pub llm_api_url: String,

    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Timeout applied to every outbound request, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Number of recommendations returned by the mood matcher
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_llm_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_max_recommendations() -> usize {
    6
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        // Blank keys are treated the same as missing ones
        Ok(Self {
            tmdb_api_key: config.tmdb_api_key.filter(|k| !k.trim().is_empty()),
            llm_api_key: config.llm_api_key.filter(|k| !k.trim().is_empty()),
            ..config
        })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = Config::from_iter(Vec::new()).unwrap();
        assert_eq!(config.tmdb_api_key, None);
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.recommendation_mode, RecommendationMode::Heuristic);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.max_recommendations, 6);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_keys_and_mode() {
        let config = Config::from_iter(vars(&[
            ("TMDB_API_KEY", "abc"),
            ("RECOMMENDATION_MODE", "generative"),
            ("LLM_API_KEY", "sk-test"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.tmdb_api_key.as_deref(), Some("abc"));
        assert_eq!(config.llm_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.recommendation_mode, RecommendationMode::Generative);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = Config::from_iter(vars(&[("TMDB_API_KEY", "   ")])).unwrap();
        assert_eq!(config.tmdb_api_key, None);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = Config::from_iter(vars(&[("RECOMMENDATION_MODE", "psychic")]));
        assert!(result.is_err());
    }
}
