//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`App`](crate::App) construction. Not a builder:
//! every port is required and nothing has a default.
//! 仅用于参数打包，所有依赖都是必需的。

use std::sync::Arc;

use od_core::ports::{AlertPort, ImagePickerPort, OrphanageApiPort};

#[derive(Clone)]
pub struct AppDeps {
    pub api: Arc<dyn OrphanageApiPort>,
    pub image_picker: Arc<dyn ImagePickerPort>,
    pub alert: Arc<dyn AlertPort>,
}
