//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InspectorMessage, ModalMessage, SearchMessage};
use crate::model::{App, FocusPanel};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Paste(text) => handle_paste(&text, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::PROVIDER_INFO.matches(&key) {
        return AppMessage::ShowProviderInfo;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端发送 BackTab 时不带 SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    if app.focus.is_text_input() {
        return handle_address_keys(key);
    }

    // 非输入焦点下的单键快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    match app.focus {
        FocusPanel::Provider => handle_provider_keys(key),
        FocusPanel::Candidates => handle_candidate_keys(key),
        FocusPanel::Inspector => handle_inspector_keys(key),
        FocusPanel::Address => AppMessage::Noop,
    }
}

/// 地址输入框
fn handle_address_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Search(SearchMessage::ClearInput);
    }

    let msg = match key.code {
        KeyCode::Enter => SearchMessage::Submit,
        KeyCode::Backspace => SearchMessage::Backspace,
        KeyCode::Delete => SearchMessage::Delete,
        KeyCode::Left => SearchMessage::CursorLeft,
        KeyCode::Right => SearchMessage::CursorRight,
        KeyCode::Home => SearchMessage::CursorHome,
        KeyCode::End => SearchMessage::CursorEnd,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            SearchMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Search(msg)
}

/// 粘贴的文本插入地址框（只取第一行）
fn handle_paste(text: &str, app: &App) -> AppMessage {
    if app.modal.is_open() || !app.focus.is_text_input() {
        return AppMessage::Noop;
    }
    match text.lines().next() {
        Some(line) if !line.is_empty() => AppMessage::Search(SearchMessage::Paste(line.to_string())),
        _ => AppMessage::Noop,
    }
}

/// Provider 选择器
fn handle_provider_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
            AppMessage::Search(SearchMessage::PrevProvider)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j' | ' ') => {
            AppMessage::Search(SearchMessage::NextProvider)
        }
        KeyCode::Enter => AppMessage::Search(SearchMessage::Submit),
        _ => AppMessage::Noop,
    }
}

/// 候选列表
fn handle_candidate_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => SearchMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => SearchMessage::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => SearchMessage::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => SearchMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Search(msg)
}

/// 树查看器
fn handle_inspector_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::EXPAND_ALL.matches(&key) {
        return AppMessage::Inspector(InspectorMessage::ExpandAll);
    }
    if DefaultKeymap::COLLAPSE_ALL.matches(&key) {
        return AppMessage::Inspector(InspectorMessage::CollapseAll);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => InspectorMessage::Up,
        KeyCode::Down | KeyCode::Char('j') => InspectorMessage::Down,
        KeyCode::PageUp => InspectorMessage::PageUp,
        KeyCode::PageDown => InspectorMessage::PageDown,
        KeyCode::Home | KeyCode::Char('g') => InspectorMessage::Top,
        KeyCode::End | KeyCode::Char('G') => InspectorMessage::Bottom,
        KeyCode::Enter | KeyCode::Char(' ') => InspectorMessage::Toggle,
        _ => return AppMessage::Noop,
    };
    AppMessage::Inspector(msg)
}

/// 弹窗中的按键：Esc / Enter / q / Ctrl+C 关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocode_provider::ProviderId;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn q_types_into_address_but_quits_elsewhere() {
        let mut app = App::new(ProviderId::Google);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Search(SearchMessage::Input('q'))
        ));
        app.focus = FocusPanel::Inspector;
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn back_tab_moves_focus_back_with_or_without_shift() {
        let app = App::new(ProviderId::Google);
        let shifted = Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(matches!(handle_event(shifted, &app), AppMessage::FocusPrev));
        assert!(matches!(
            handle_event(press(KeyCode::BackTab), &app),
            AppMessage::FocusPrev
        ));
    }

    #[test]
    fn enter_submits_from_address() {
        let app = App::new(ProviderId::Google);
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Search(SearchMessage::Submit)
        ));
    }

    #[test]
    fn inspector_keys() {
        let mut app = App::new(ProviderId::Google);
        app.focus = FocusPanel::Inspector;
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Inspector(InspectorMessage::Toggle)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('e')), &app),
            AppMessage::Inspector(InspectorMessage::ExpandAll)
        ));
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = App::new(ProviderId::Google);
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn tab_moves_focus() {
        let app = App::new(ProviderId::Google);
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::FocusNext
        ));
    }
}
