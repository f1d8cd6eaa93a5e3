//! 配置服务

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geocode_provider::{ClientConfig, ProviderId};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名
pub const APP_DIR_NAME: &str = "geocode-tui";
/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 启动时选中的 Provider
    pub default_provider: ProviderId,
    pub theme: Theme,
    /// 按 Provider 覆盖 API 地址（如自建 Nominatim）
    pub endpoints: BTreeMap<ProviderId, String>,
    pub max_retries: u32,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            default_provider: ProviderId::Google,
            theme: Theme::Dark,
            endpoints: BTreeMap::new(),
            max_retries: client.max_retries,
            request_timeout_secs: client.request_timeout_secs,
        }
    }
}

impl AppConfig {
    /// 传输层配置；API key 只从环境变量读取
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::from_env();
        client.endpoints.clone_from(&self.endpoints);
        client.max_retries = self.max_retries;
        client.request_timeout_secs = self.request_timeout_secs;
        client
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务（`$CONFIG_DIR/geocode-tui/config.json`）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台默认配置目录；无法确定时退回当前目录
    pub fn new() -> Self {
        Self::with_path(default_config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }
}

/// 应用配置目录（日志文件也放在这里）
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
