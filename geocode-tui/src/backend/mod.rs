//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//!     - ConfigService：读取 `config.json`（只读，不回写）
//!     - GeocodeService：在 tokio 运行时上执行请求，经 mpsc 把结果送回主循环

mod config_service;
mod geocode_service;

pub use config_service::{ConfigService, LocalConfigService, default_config_dir};
pub use geocode_service::GeocodeService;
