//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成消息，Update 层消费消息修改 Model。
//! 后台搜索完成后，主循环也以 `AppMessage::SearchCompleted` 的形式送回结果。
//!
//!     AppMessage
//!         ├── Search(SearchMessage)        // 表单输入、Provider 切换、候选选择
//!         ├── Inspector(InspectorMessage)  // 树查看器光标与折叠
//!         ├── Modal(ModalMessage)          // 弹窗
//!         └── SearchCompleted(..)          // 后台返回

mod app;
mod inspector;
mod modal;
mod search;

pub use app::AppMessage;
pub use inspector::InspectorMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
