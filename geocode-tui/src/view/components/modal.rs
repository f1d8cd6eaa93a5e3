//! 弹窗组件

use geocode_provider::ProviderId;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::{App, Modal};
use crate::view::theme::{Styles, colors};

use super::centered_rect;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::ProviderInfo { provider } => render_provider_info(app, frame, *provider),
    }
}

/// 弹窗外框，返回内容区域
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn section(title: &'static str) -> Line<'static> {
    Line::styled(
        title,
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD),
    )
}

fn shortcut(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::hint_key()),
        Span::styled(desc, Style::default().fg(colors().fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let lines = vec![
        section("Global"),
        shortcut("Tab", "Next panel (Shift+Tab: previous)"),
        shortcut("Alt+r", "Repeat last search"),
        shortcut("Alt+i", "Provider details"),
        shortcut("F1 / ?", "This help"),
        shortcut("Alt+q", "Quit (q outside the address field)"),
        Line::from(""),
        section("Search"),
        shortcut("Enter", "Validate address and search"),
        shortcut("←→", "Switch provider (provider field)"),
        shortcut("↑↓", "Pick a result (results list)"),
        Line::from(""),
        section("Response tree"),
        shortcut("↑↓ PgUp/Dn", "Move cursor"),
        shortcut("Space", "Expand / collapse node"),
        shortcut("e / c", "Expand all / collapse all"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Styles::muted()),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let inner = modal_frame(frame, "Help", 56, height);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染 Provider 详情弹窗
fn render_provider_info(app: &App, frame: &mut Frame, provider: ProviderId) {
    let Some(meta) = app.provider_metadata(provider) else {
        return;
    };

    let endpoint = app
        .endpoints
        .get(&provider)
        .map_or_else(|| format!("{} (default)", meta.default_base_url), Clone::clone);

    let key_line = match meta.api_key_env {
        Some(var) if app.configured_keys.contains(&provider) => {
            Line::from(vec![
                Span::raw(format!("API key:   {var} ")),
                Span::styled("configured", Style::default().fg(colors().success)),
            ])
        }
        Some(var) => Line::from(vec![
            Span::raw(format!("API key:   {var} ")),
            Span::styled("missing", Styles::error()),
        ]),
        None => Line::raw("API key:   not required"),
    };

    let lines = vec![
        Line::styled(meta.name, Styles::title()),
        Line::styled(meta.description, Styles::muted()),
        Line::from(""),
        Line::raw(format!("Id:        {}", meta.id)),
        Line::raw(format!("Endpoint:  {endpoint}")),
        key_line,
        Line::from(""),
        Line::styled("Press Esc to close", Styles::muted()),
    ];

    let inner = modal_frame(frame, "Provider", 64, 10);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
