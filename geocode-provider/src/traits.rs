use serde::Deserialize;
use serde_json::Value;
use url::{Url, form_urlencoded};

use crate::error::Result;
use crate::types::{Coordinate, ProviderId, ProviderMetadata};

/// Geocoding provider trait.
///
/// Each implementation encapsulates one backend's request shape and response field paths.
/// All methods are pure: no I/O, no interior state. Callers normally go through the free
/// functions in [`crate::adapter`] instead of using implementations directly.
pub trait GeocodeProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> ProviderId;

    /// 获取 Provider 元数据
    fn metadata(&self) -> ProviderMetadata;

    /// 构建请求地址（endpoint + query），地址原样拼接，不做转义
    ///
    /// `base_url` has no trailing slash.
    fn request_target(&self, base_url: &str, address: &str) -> String;

    /// 构建已转义的请求 URL
    ///
    /// The default implementation form-encodes the address and feeds it to
    /// [`request_target`](Self::request_target), which suits providers that take the
    /// address as a query parameter. Providers that put it in the path override this.
    fn request_url(&self, base_url: &str, address: &str) -> std::result::Result<Url, url::ParseError> {
        let encoded: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
        Url::parse(&self.request_target(base_url, &encoded))
    }

    /// 从原始响应中取出结果数组；结构不符时返回空切片
    fn results<'a>(&self, raw: &'a Value) -> &'a [Value];

    /// 从单个结果条目中提取坐标，失败时返回描述原因的字符串
    fn entry_coordinate(&self, entry: &Value) -> std::result::Result<Coordinate, String>;

    /// 从单个结果条目中提取显示标签（不含占位符回退）
    fn entry_label<'a>(&self, entry: &'a Value) -> Option<&'a str>;

    /// 检查响应体中内嵌的错误状态
    ///
    /// Some providers answer HTTP 200 with an error status in the body. The default
    /// implementation accepts every payload.
    fn check_response(&self, _raw: &Value) -> Result<()> {
        Ok(())
    }
}

/// 用 serde 将 `&Value` 解析为 Provider 的响应结构，错误转为描述字符串
pub(crate) fn parse_entry<'a, T>(entry: &'a Value) -> std::result::Result<T, String>
where
    T: Deserialize<'a>,
{
    T::deserialize(entry).map_err(|e| e.to_string())
}

/// 取出指定 JSON 指针位置的非空字符串
pub(crate) fn non_empty_str<'a>(entry: &'a Value, pointer: &str) -> Option<&'a str> {
    entry
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
