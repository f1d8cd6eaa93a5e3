//!
//! src/tree/mod.rs
//! JSON 树查看器（纯逻辑，不依赖 ratatui）
//!
//! 任意 `serde_json::Value` 都被展开为一组可见行：
//!     - 对象 / 数组（非空）是可折叠节点，各自拥有展开 / 折叠状态
//!     - 空对象 / 空数组渲染为叶子 `{}` / `[]`
//!     - 字符串加引号，数字 / 布尔原样输出，null 输出 `null`
//!
//! 节点状态以 `NodePath`（从根出发的键 / 下标序列）为键存放在 `TreeState` 中，
//! 未被用户切换过的节点按深度决定初始状态：深度 < 2 展开，其余折叠。
//!
//! 渲染是惰性的：折叠的子树只读取长度，不会遍历其子节点。
//! 相同的值 + 相同的状态总是得到相同的行。

mod path;
mod rows;
mod state;

pub use path::NodePath;
pub use rows::{COLLAPSED_MARK, EXPANDED_MARK, RowKind, TreeRow, render_rows};
pub use state::TreeState;
