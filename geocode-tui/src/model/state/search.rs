//! 搜索表单与结果状态
//!
//! 校验错误（`validation`）与请求结果（`outcome`）是两个独立通道：
//! 一次校验失败不会清掉上一次的结果，一次成功的请求也不会残留旧的校验错误。

use geocode_provider::{
    AddressValidationError, Candidate, Coordinate, GeocodeError, GeocodeOutcome, ProviderId,
    coordinate_of, validate_address,
};
use serde_json::Value;

use super::input::TextInput;

/// 提交给后台的一次搜索
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// 单调递增的请求编号，用于丢弃过期响应
    pub id: u64,
    pub provider: ProviderId,
    pub address: String,
}

/// 后台返回的搜索结果
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub id: u64,
    pub provider: ProviderId,
    pub address: String,
    pub result: Result<GeocodeOutcome, GeocodeError>,
}

/// 搜索表单
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub address: TextInput,
    pub provider: ProviderId,
}

/// 请求结果
#[derive(Debug, Clone, Default)]
pub enum FetchOutcome {
    /// 尚未搜索
    #[default]
    Idle,
    /// 请求进行中
    Loading { provider: ProviderId, address: String },
    /// 请求或解析失败
    Failed {
        provider: ProviderId,
        address: String,
        error: GeocodeError,
    },
    /// 收到响应（可能为空）
    Loaded(SearchResult),
}

impl FetchOutcome {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            Self::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn result_mut(&mut self) -> Option<&mut SearchResult> {
        match self {
            Self::Loaded(result) => Some(result),
            _ => None,
        }
    }
}

/// 一次成功的搜索：原始响应 + 候选列表 + 当前选中项
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub provider: ProviderId,
    pub address: String,
    pub raw: Value,
    pub candidates: Vec<Candidate>,
    pub selected: usize,
}

impl SearchResult {
    pub fn from_outcome(outcome: GeocodeOutcome, address: String) -> Self {
        Self {
            provider: outcome.provider,
            address,
            raw: outcome.raw,
            candidates: outcome.candidates,
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// 多于一个结果时才需要用户消歧
    pub fn needs_disambiguation(&self) -> bool {
        self.candidates.len() > 1
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates.get(self.selected)
    }

    /// 当前选中项的坐标（地图焦点）
    pub fn map_focus(&self) -> Option<Result<Coordinate, GeocodeError>> {
        if self.is_empty() {
            return None;
        }
        Some(coordinate_of(&self.raw, self.provider, self.selected))
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.candidates.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.candidates.len().saturating_sub(1);
    }
}

/// 搜索页面状态
#[derive(Debug, Clone)]
pub struct SearchState {
    pub form: SearchForm,
    /// 最近一次提交的校验错误
    pub validation: Option<AddressValidationError>,
    pub outcome: FetchOutcome,
    /// 最近一次通过校验的查询（用于刷新）
    pub last_query: Option<(ProviderId, String)>,
    next_request_id: u64,
    pending_request_id: Option<u64>,
}

impl SearchState {
    pub fn new(provider: ProviderId) -> Self {
        Self {
            form: SearchForm {
                address: TextInput::default(),
                provider,
            },
            validation: None,
            outcome: FetchOutcome::Idle,
            last_query: None,
            next_request_id: 1,
            pending_request_id: None,
        }
    }

    /// 校验表单并生成请求；校验失败时记录错误并返回 `None`
    pub fn submit(&mut self) -> Option<SearchRequest> {
        match validate_address(self.form.address.value()) {
            Ok(address) => {
                let address = address.to_string();
                self.validation = None;
                Some(self.start(self.form.provider, address))
            }
            Err(e) => {
                self.validation = Some(e);
                None
            }
        }
    }

    /// 重新执行最近一次查询
    pub fn refresh(&mut self) -> Option<SearchRequest> {
        let (provider, address) = self.last_query.clone()?;
        Some(self.start(provider, address))
    }

    fn start(&mut self, provider: ProviderId, address: String) -> SearchRequest {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request_id = Some(id);
        self.last_query = Some((provider, address.clone()));
        self.outcome = FetchOutcome::Loading {
            provider,
            address: address.clone(),
        };
        SearchRequest {
            id,
            provider,
            address,
        }
    }

    /// 应用后台响应；过期响应被忽略并返回 `false`
    pub fn complete(&mut self, response: SearchResponse) -> bool {
        if self.pending_request_id != Some(response.id) {
            return false;
        }
        self.pending_request_id = None;
        self.outcome = match response.result {
            Ok(outcome) => FetchOutcome::Loaded(SearchResult::from_outcome(outcome, response.address)),
            Err(error) => FetchOutcome::Failed {
                provider: response.provider,
                address: response.address,
                error,
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(raw: Value) -> GeocodeOutcome {
        GeocodeOutcome {
            provider: ProviderId::Nominatim,
            candidates: geocode_provider::list_candidates(&raw, ProviderId::Nominatim),
            raw,
        }
    }

    fn state_with(address: &str) -> SearchState {
        let mut state = SearchState::new(ProviderId::Nominatim);
        state.form.address = TextInput::new(address);
        state
    }

    #[test]
    fn submit_trims_and_starts_loading() {
        let mut state = state_with("  Curitiba ");
        let request = state.submit();
        assert_eq!(
            request,
            Some(SearchRequest {
                id: 1,
                provider: ProviderId::Nominatim,
                address: "Curitiba".to_string()
            })
        );
        assert!(state.outcome.is_loading());
        assert_eq!(state.validation, None);
    }

    #[test]
    fn validation_failure_keeps_previous_outcome() {
        let mut state = state_with("Curitiba");
        let request = state.submit().map(|r| r.id);
        assert!(state.complete(SearchResponse {
            id: request.unwrap_or_default(),
            provider: ProviderId::Nominatim,
            address: "Curitiba".into(),
            result: Ok(outcome(json!([]))),
        }));

        state.form.address = TextInput::new("Curitiba; rm");
        assert_eq!(state.submit(), None);
        assert_eq!(
            state.validation,
            Some(AddressValidationError::InvalidCharacters { found: ';' })
        );
        assert!(matches!(state.outcome, FetchOutcome::Loaded(_)));
    }

    #[test]
    fn successful_submit_clears_validation() {
        let mut state = state_with("");
        assert_eq!(state.submit(), None);
        assert_eq!(state.validation, Some(AddressValidationError::Empty));

        state.form.address = TextInput::new("Natal");
        assert!(state.submit().is_some());
        assert_eq!(state.validation, None);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = state_with("Natal");
        let first = state.submit().map(|r| r.id).unwrap_or_default();
        let second = state.submit().map(|r| r.id).unwrap_or_default();
        assert_ne!(first, second);

        let stale = SearchResponse {
            id: first,
            provider: ProviderId::Nominatim,
            address: "Natal".into(),
            result: Ok(outcome(json!([]))),
        };
        assert!(!state.complete(stale));
        assert!(state.outcome.is_loading());
    }

    #[test]
    fn failure_is_recorded() {
        let mut state = state_with("Natal");
        let id = state.submit().map(|r| r.id).unwrap_or_default();
        state.complete(SearchResponse {
            id,
            provider: ProviderId::Nominatim,
            address: "Natal".into(),
            result: Err(GeocodeError::Timeout {
                provider: "nominatim".into(),
                detail: "30s".into(),
            }),
        });
        assert!(matches!(
            state.outcome,
            FetchOutcome::Failed {
                error: GeocodeError::Timeout { .. },
                ..
            }
        ));
    }

    #[test]
    fn selection_starts_at_zero_and_is_clamped() {
        let raw = json!([
            {"lat": "1", "lon": "2", "display_name": "A"},
            {"lat": "3", "lon": "4", "display_name": "B"}
        ]);
        let mut result = SearchResult::from_outcome(outcome(raw), "x".into());
        assert_eq!(result.selected, 0);
        assert!(result.needs_disambiguation());

        result.select_next();
        result.select_next();
        assert_eq!(result.selected, 1);
        assert_eq!(
            result.map_focus().and_then(Result::ok).map(|c| c.to_query_string()),
            Some("3,4".to_string())
        );

        result.select_previous();
        result.select_previous();
        assert_eq!(result.selected, 0);
    }

    #[test]
    fn empty_result_has_no_map_focus() {
        let result = SearchResult::from_outcome(outcome(json!([])), "x".into());
        assert!(result.is_empty());
        assert!(result.map_focus().is_none());
    }

    #[test]
    fn refresh_repeats_last_query() {
        let mut state = state_with("Recife");
        assert_eq!(state.refresh(), None);
        state.submit();
        state.form.address = TextInput::new("changed");
        let again = state.refresh();
        assert_eq!(again.map(|r| r.address), Some("Recife".to_string()));
    }
}
