//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No I/O / 禁止读写文件**
//!
//! Missing keys fall back to [`AppConfig::default`]; values that are
//! present are taken as-is.

use crate::geo::{Coordinate, CoordinateError, MapRegion};

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the directory API, e.g. `http://localhost:3333`
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Extra attempts for listing/detail reads on timeouts and network errors.
    /// Registrations are never retried automatically.
    pub read_retries: u32,

    /// Initial map center latitude
    pub map_latitude: f64,

    /// Initial map center longitude
    pub map_longitude: f64,

    /// Initial zoom delta (same for both axes)
    pub map_delta: f64,

    /// Whether the photo library grants access when asked
    pub media_library_access: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            request_timeout_secs: 10,
            read_retries: 2,
            map_latitude: MapRegion::DEFAULT_LATITUDE,
            map_longitude: MapRegion::DEFAULT_LONGITUDE,
            map_delta: MapRegion::DEFAULT_DELTA,
            media_library_access: true,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));
        let float = |name: &str, key: &str| {
            section(name, key).and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
        };

        Ok(Self {
            api_base_url: section("api", "base_url")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            request_timeout_secs: section("api", "timeout_secs")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(defaults.request_timeout_secs),
            read_retries: section("api", "retries")
                .and_then(|v| v.as_integer())
                .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                .unwrap_or(defaults.read_retries),
            map_latitude: float("map", "latitude").unwrap_or(defaults.map_latitude),
            map_longitude: float("map", "longitude").unwrap_or(defaults.map_longitude),
            map_delta: float("map", "delta").unwrap_or(defaults.map_delta),
            media_library_access: section("picker", "media_library_access")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.media_library_access),
        })
    }

    /// Initial region of the listing map.
    pub fn initial_region(&self) -> Result<MapRegion, CoordinateError> {
        let center = Coordinate::new(self.map_latitude, self.map_longitude)?;
        Ok(MapRegion::new(center, self.map_delta))
    }
}
