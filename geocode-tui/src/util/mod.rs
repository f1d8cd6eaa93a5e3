//!
//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//!     terminal  终端初始化 / 恢复（原始模式、备用屏幕）
//!     logging   日志写入配置目录下的文件（stdout 归终端界面所有）
//!
//! 无论 `app::run` 成功与否，main 都会先调用 `restore_terminal` 再返回结果，
//! 否则终端会停留在原始模式。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
