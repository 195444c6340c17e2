use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github: GitHubConfig,
    pub stats: StatsConfig,
}

/// Repository listing API configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the API, without trailing slash
    pub api_url: String,
    pub user_agent: String,
    /// Organization queried instead of the caller-supplied one.
    /// `None` means the caller's organization is used as-is.
    pub org_override: Option<String>,
}

/// Statistics endpoint defaults
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Number of repositories requested when the query omits `limit`
    pub default_limit: i32,
}

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_ORG_OVERRIDE: &str = "microsoft";
pub const DEFAULT_REPO_LIMIT: i32 = 5;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            github: GitHubConfig::from_env()?,
            stats: StatsConfig::from_env(),
        })
    }
}

impl GitHubConfig {
    /// Load API client configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = url::Url::parse(&api_url).map_err(|_| ConfigError::InvalidGitHubUrl)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidGitHubUrl);
        }

        let user_agent = env::var("GITHUB_USER_AGENT")
            .unwrap_or_else(|_| format!("repopulse/{}", env!("CARGO_PKG_VERSION")));

        // An explicitly empty override disables it
        let org_override = match env::var("GITHUB_ORG_OVERRIDE") {
            Ok(org) if org.trim().is_empty() => None,
            Ok(org) => Some(org.trim().to_string()),
            Err(_) => Some(DEFAULT_ORG_OVERRIDE.to_string()),
        };

        Ok(Self {
            api_url,
            user_agent,
            org_override,
        })
    }
}

impl StatsConfig {
    /// Load statistics defaults from environment variables
    pub fn from_env() -> Self {
        Self {
            default_limit: env::var("DEFAULT_REPO_LIMIT")
                .unwrap_or_else(|_| DEFAULT_REPO_LIMIT.to_string())
                .parse()
                .unwrap_or(DEFAULT_REPO_LIMIT),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidGitHubUrl,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "PORT must be a valid number"),
            ConfigError::InvalidGitHubUrl => {
                write!(f, "GITHUB_API_URL must be a valid http(s) URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
