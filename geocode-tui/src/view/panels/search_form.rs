//! 搜索表单：地址输入 + Provider 选择

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel};
use crate::view::components::panel_block;
use crate::view::theme::{Styles, colors};

/// 输入行前缀
const PROMPT: &str = "> ";

/// 渲染搜索表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.search.form;
    let address_focused = app.focus == FocusPanel::Address;
    let provider_focused = app.focus == FocusPanel::Provider;

    let block = panel_block("Search", address_focused || provider_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_style = if address_focused {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let address_line = if form.address.is_empty() && !address_focused {
        Line::from(vec![
            Span::styled(PROMPT, Styles::muted()),
            Span::styled("e.g. Avenida Paulista 1578, São Paulo", Styles::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(c.highlight)),
            Span::styled(form.address.value().to_string(), input_style),
        ])
    };

    let provider_name = app
        .provider_metadata(form.provider)
        .map_or(form.provider.as_str(), |m| m.name);
    let provider_line = if provider_focused {
        Line::styled(
            format!("  ◀ {provider_name} ▶"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(format!("    {provider_name}"), Style::default().fg(c.fg))
    };

    let validation_line = match &app.search.validation {
        Some(err) => Line::styled(err.to_string(), Styles::error()),
        None => Line::from(""),
    };

    let lines = vec![
        Line::styled("Address", Styles::muted()),
        address_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("Provider", Styles::muted()),
            if provider_focused {
                Span::styled(" (←→ to switch)", Styles::muted())
            } else {
                Span::raw("")
            },
        ]),
        provider_line,
        validation_line,
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    // 真实光标放在输入位置
    if address_focused && !app.modal.is_open() {
        let offset = u16::try_from(PROMPT.len() + form.address.cursor_width()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(offset)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y + 1));
    }
}
