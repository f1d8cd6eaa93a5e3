//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Next Panel")];

    match app.focus {
        FocusPanel::Address => {
            hints.push(("Enter", "Search"));
            hints.push(("Ctrl+u", "Clear"));
        }
        FocusPanel::Provider => {
            hints.push(("←→", "Switch Provider"));
            hints.push(("Enter", "Search"));
            hints.push(("Alt+i", "Provider Info"));
        }
        FocusPanel::Candidates => {
            hints.push(("↑↓", "Select"));
        }
        FocusPanel::Inspector => {
            hints.push(("↑↓", "Move"));
            hints.push(("Space", "Toggle"));
            hints.push(("e/c", "Expand/Collapse All"));
        }
    }

    if app.search.last_query.is_some() {
        hints.push(("Alt+r", "Refresh"));
    }
    hints.push(("F1", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocode_provider::ProviderId;

    #[test]
    fn hints_follow_focus() {
        let mut app = App::new(ProviderId::Google);
        app.focus = FocusPanel::Inspector;
        let hints = get_hints(&app);
        assert!(hints.contains(&("Space", "Toggle")));
        assert!(!hints.iter().any(|(k, _)| *k == "Alt+r"));
    }
}
