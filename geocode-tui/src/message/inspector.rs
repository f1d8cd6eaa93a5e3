//! 树查看器消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorMessage {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// 展开 / 折叠光标所在节点
    Toggle,
    ExpandAll,
    CollapseAll,
}
