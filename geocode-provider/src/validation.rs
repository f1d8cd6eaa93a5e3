//! 地址输入校验
//!
//! 在调用 Provider 之前执行的边界检查，与请求/解析错误分属两条独立通道。

use serde::Serialize;
use thiserror::Error;

/// 地址校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AddressValidationError {
    /// 地址为空或仅包含空白
    #[error("Please enter an address")]
    Empty,

    /// 地址包含不允许的字符
    #[error("Address can only contain letters, numbers, commas, and spaces (found {found:?})")]
    InvalidCharacters {
        /// 第一个不允许的字符
        found: char,
    },
}

/// 地址中允许出现的字符：字母（含非 ASCII 字母）、数字、逗号、空格
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == ',' || c == ' '
}

/// 校验地址，成功时返回去除首尾空白后的地址
///
/// ```rust
/// use geocode_provider::{validate_address, AddressValidationError};
///
/// assert_eq!(validate_address("  São Paulo, SP "), Ok("São Paulo, SP"));
/// assert_eq!(validate_address("   "), Err(AddressValidationError::Empty));
/// ```
pub fn validate_address(input: &str) -> Result<&str, AddressValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AddressValidationError::Empty);
    }
    match trimmed.chars().find(|c| !is_allowed(*c)) {
        Some(found) => Err(AddressValidationError::InvalidCharacters { found }),
        None => Ok(trimmed),
    }
}
