//! Simple CLI configuration loader for datastage
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./datastage.json or ./.datastage/config.json
//! 3. Git repository root: <repo_root>/.datastage/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/datastage/config.json or ~/.config/datastage/config.json
//! 5. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use datastage_core::BackendConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// Base URL of the research backend
    pub backend_url: String,
    /// Status poll interval in milliseconds (optional)
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    /// Per-request timeout in milliseconds (optional)
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// Additional headers (optional)
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    backend_url_override: Option<String>,
    poll_interval_override: Option<u64>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            backend_url_override: None,
            poll_interval_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set backend URL override
    pub fn with_backend_url_override(mut self, backend_url: String) -> Self {
        self.backend_url_override = Some(backend_url);
        self
    }

    /// Set poll interval override
    pub fn with_poll_interval_override(mut self, interval_ms: u64) -> Self {
        self.poll_interval_override = Some(interval_ms);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<BackendConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(backend_url) = &self.backend_url_override {
            config.backend_url = backend_url.clone();
        }
        if let Some(interval) = self.poll_interval_override {
            config.poll_interval_ms = Some(interval);
        }

        // Step 3: Resolve to the final backend config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        self.try_load_env_only()
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./datastage.json first
        let datastage_json = cwd.join("datastage.json");
        if datastage_json.exists() {
            return Ok(Some(self.load_file(&datastage_json).await?));
        }

        // Try ./.datastage/config.json
        let datastage_dir_config = cwd.join(".datastage").join("config.json");
        if datastage_dir_config.exists() {
            return Ok(Some(self.load_file(&datastage_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".datastage").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("datastage").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from environment variables only
    fn try_load_env_only(&self) -> Result<RawConfig> {
        let env_url = std::env::var("DATASTAGE_BACKEND_URL").ok();

        let backend_url = match (env_url, &self.backend_url_override) {
            (Some(url), _) => url,
            (None, Some(url)) => url.clone(),
            (None, None) => {
                return Err(anyhow!(
                    "No configuration found. Please create a datastage.json file, set \
                     DATASTAGE_BACKEND_URL, or pass --backend-url"
                ))
            }
        };

        let poll_interval_ms = std::env::var("DATASTAGE_POLL_INTERVAL_MS")
            .ok()
            .and_then(|raw| raw.parse().ok());
        let request_timeout_ms = std::env::var("DATASTAGE_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse().ok());

        Ok(RawConfig {
            backend_url,
            poll_interval_ms,
            request_timeout_ms,
            headers: HashMap::new(),
        })
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::home_dir().map(|home| home.join(".config"))
        }
    }

    /// Resolve raw config to a validated BackendConfig
    fn resolve_config(&self, config: RawConfig) -> Result<BackendConfig> {
        let mut resolved = BackendConfig::new(config.backend_url).with_headers(config.headers);

        if let Some(interval) = config.poll_interval_ms {
            resolved = resolved.with_poll_interval_ms(interval);
        }
        if let Some(timeout) = config.request_timeout_ms {
            resolved = resolved.with_request_timeout_ms(timeout);
        }

        // Validate
        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
