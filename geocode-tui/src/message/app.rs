//! 应用主消息枚举

use super::{InspectorMessage, ModalMessage, SearchMessage};
use crate::model::SearchResponse;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板
    FocusNext,

    /// 焦点移到上一个面板
    FocusPrev,

    /// 搜索表单 / 候选列表相关消息
    Search(SearchMessage),

    /// 树查看器相关消息
    Inspector(InspectorMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台搜索完成
    SearchCompleted(Box<SearchResponse>),

    /// 重新执行最近一次搜索
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 显示当前 Provider 详情
    ShowProviderInfo,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
