//! 焦点状态定义

/// 焦点面板枚举（Tab 顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 地址输入框
    #[default]
    Address,
    /// Provider 选择器
    Provider,
    /// 候选结果列表
    Candidates,
    /// JSON 树查看器
    Inspector,
}

impl FocusPanel {
    /// 下一个面板
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Address => Self::Provider,
            Self::Provider => Self::Candidates,
            Self::Candidates => Self::Inspector,
            Self::Inspector => Self::Address,
        }
    }

    /// 上一个面板
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Address => Self::Inspector,
            Self::Provider => Self::Address,
            Self::Candidates => Self::Provider,
            Self::Inspector => Self::Candidates,
        }
    }

    /// 是否为文本输入焦点（此时普通字符键用于输入）
    pub fn is_text_input(self) -> bool {
        self == Self::Address
    }
}
