//! # Dependency Wiring / 依赖注入
//!
//! Builds the adapters from [`AppConfig`] and assembles them into an [`App`].
//! This is the only place that names concrete adapter types.

use std::path::PathBuf;
use std::sync::Arc;

use od_app::{App, AppDeps};
use od_core::config::AppConfig;
use od_infra::{FileImagePicker, HttpApiConfig, HttpOrphanageApi};
use tracing::info;

use crate::adapters::ConsoleAlert;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("API client initialization failed: {0}")]
    ApiClientInit(String),

    #[error("Invalid initial map region: {0}")]
    MapRegion(String),
}

/// A wired application plus the adapters the commands drive directly.
pub struct WiredApp {
    pub app: App,
    pub picker: Arc<FileImagePicker>,
    pub alert: Arc<ConsoleAlert>,
}

/// Wire every port to its adapter.
///
/// `images` pre-loads the file picker; each "add image" takes the next one.
pub fn wire_dependencies(
    config: &AppConfig,
    images: Vec<PathBuf>,
    alert: ConsoleAlert,
) -> WiringResult<WiredApp> {
    let api = HttpOrphanageApi::new(HttpApiConfig::from_app_config(config))
        .map_err(|e| WiringError::ApiClientInit(e.to_string()))?;
    info!(base_url = %api.base_url(), "API client ready");

    let region = config
        .initial_region()
        .map_err(|e| WiringError::MapRegion(e.to_string()))?;

    let picker = Arc::new(FileImagePicker::new(config.media_library_access, images));
    let alert = Arc::new(alert);
    let deps = AppDeps {
        api: Arc::new(api),
        image_picker: picker.clone(),
        alert: alert.clone(),
    };

    Ok(WiredApp {
        app: App::new(deps, region),
        picker,
        alert,
    })
}
