//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，只包含数据结构与只影响自身的小方法。
//! 所有状态变更都通过 Update 层触发，View 层只读。
//!
//!     App {
//!         focus: FocusPanel,          // Address / Provider / Candidates / Inspector
//!         search: SearchState,        // 表单、校验错误、请求结果（两条独立通道）
//!         inspector: InspectorState,  // 树节点状态 + 光标
//!         modal: ModalState,          // 帮助 / Provider 详情
//!     }
//!
//! 新响应到达时 `inspector` 被重置，候选选中项回到 0。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    FetchOutcome, InspectorState, Modal, ModalState, SearchRequest, SearchResponse, SearchResult,
    SearchState,
};
