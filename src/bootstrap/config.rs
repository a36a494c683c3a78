//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Apply environment and command-line overrides / 应用环境变量与命令行覆盖
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Precedence, highest first: `--api-url`, `ORPHANAGES_API_URL`, the config
//! file, [`AppConfig::default`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use od_core::config::AppConfig;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "ORPHANAGES_API_URL";

const CONFIG_DIR: &str = "orphanages";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<platform config dir>/orphanages/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Resolve the effective configuration.
///
/// An explicit `config_path` must exist; the default location is only used
/// when a file is present there.
pub fn resolve_config(
    config_path: Option<&Path>,
    env_api_url: Option<String>,
    cli_api_url: Option<String>,
) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => load_config(&path)?,
            None => AppConfig::default(),
        },
    };

    if let Some(url) = cli_api_url.or(env_api_url).filter(|url| !url.trim().is_empty()) {
        config.api_base_url = url;
    }
    Ok(config)
}
