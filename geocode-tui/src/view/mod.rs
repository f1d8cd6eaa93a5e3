//!
//! src/view/mod.rs
//! View 层：只读 `App`，把状态画到终端上
//!
//!     ┌──────────────── 标题栏 ────────────────┐
//!     │ 搜索表单        │                       │
//!     ├─────────────────┤                       │
//!     │ 候选结果        │   JSON 树查看器       │
//!     ├─────────────────┤                       │
//!     │ 地图焦点        │                       │
//!     └──────────────── 状态栏 ────────────────┘
//!
//! 弹窗最后绘制，覆盖在最上层。

mod components;
mod layout;
mod panels;
pub mod theme;

pub use layout::render;
