//! 主界面面板

pub mod candidates;
pub mod inspector;
pub mod map_focus;
pub mod search_form;
