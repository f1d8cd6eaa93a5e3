//! 应用主状态结构

use std::collections::{BTreeMap, BTreeSet};

use geocode_provider::{ProviderId, ProviderMetadata, get_all_provider_metadata};

use super::{FocusPanel, InspectorState, ModalState, SearchState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 所有 Provider 的元数据（Provider 选择器使用）
    pub providers: Vec<ProviderMetadata>,

    /// 配置中覆盖的 API 地址（Provider 详情弹窗显示）
    pub endpoints: BTreeMap<ProviderId, String>,

    /// 已配置 API key 的 Provider
    pub configured_keys: BTreeSet<ProviderId>,

    /// 搜索表单与结果
    pub search: SearchState,

    /// JSON 树查看器
    pub inspector: InspectorState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(default_provider: ProviderId) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            providers: get_all_provider_metadata(),
            endpoints: BTreeMap::new(),
            configured_keys: BTreeSet::new(),
            search: SearchState::new(default_provider),
            inspector: InspectorState::default(),
            modal: ModalState::new(),
        }
    }

    /// 当前选择的 Provider 的元数据
    pub fn provider_metadata(&self, id: ProviderId) -> Option<&ProviderMetadata> {
        self.providers.iter().find(|m| m.id == id)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ProviderId::Google)
    }
}
