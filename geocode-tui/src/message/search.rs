//! 搜索面板消息

/// 搜索表单与候选列表消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    // ========== 地址输入 ==========
    Input(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,

    // ========== Provider ==========
    NextProvider,
    PrevProvider,

    /// 校验并提交搜索
    Submit,

    // ========== 候选列表 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
}
