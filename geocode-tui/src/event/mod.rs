//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件翻译为 `AppMessage`。同一个按键在不同焦点下含义不同：
//! 焦点在地址输入框时，普通字符全部用于输入，只有组合键和功能键是快捷键。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
