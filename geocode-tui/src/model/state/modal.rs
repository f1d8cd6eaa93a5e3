//! 弹窗状态

use geocode_provider::ProviderId;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// Provider 详情（端点、API key 环境变量）
    ProviderInfo { provider: ProviderId },
}

/// 弹窗状态容器
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_provider_info(&mut self, provider: ProviderId) {
        self.active = Some(Modal::ProviderInfo { provider });
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
