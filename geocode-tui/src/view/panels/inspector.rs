//! JSON 树查看器面板

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::model::{App, FetchOutcome, FocusPanel};
use crate::tree::{RowKind, TreeRow};
use crate::view::components::panel_block;
use crate::view::theme::{Styles, ThemeColors, colors};

/// 渲染树查看器
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FocusPanel::Inspector;

    let FetchOutcome::Loaded(result) = &app.search.outcome else {
        let block = panel_block("Response", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let hint = match &app.search.outcome {
            FetchOutcome::Loading { .. } => "Waiting for response...",
            FetchOutcome::Failed { .. } => "No response to show",
            _ => "The raw provider response appears here",
        };
        frame.render_widget(Paragraph::new(Line::styled(hint, Styles::muted())), inner);
        return;
    };

    let rows = app.inspector.rows(&result.raw);
    let cursor = app.inspector.cursor.min(rows.len().saturating_sub(1));
    let cursor_path = rows
        .get(cursor)
        .map(|r| r.path.to_string())
        .unwrap_or_default();

    let block = panel_block(&format!("Response · {}", result.provider), focused)
        .title_bottom(Line::styled(format!(" {cursor_path} "), Styles::muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let c = colors();
    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row_line(row, &c))).collect();
    let list = List::new(items).highlight_style(if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    });

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, inner, &mut state);
}

/// 单行的着色版本，文本与 `TreeRow::text` 一致
fn row_line(row: &TreeRow, c: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw("  ".repeat(row.depth))];
    let label = row
        .label
        .as_ref()
        .map(|l| Span::styled(format!("{l}: "), Style::default().fg(c.key)));

    match &row.kind {
        RowKind::Header {
            expanded,
            open,
            close,
            summary,
        } => {
            let mark = if *expanded {
                crate::tree::EXPANDED_MARK
            } else {
                crate::tree::COLLAPSED_MARK
            };
            spans.push(Span::styled(format!("{mark} "), Style::default().fg(c.highlight)));
            spans.extend(label);
            spans.push(Span::raw(open.to_string()));
            if !expanded {
                let summary = summary.as_deref().unwrap_or_default();
                spans.push(Span::styled(format!(" {summary} "), Styles::muted()));
                spans.push(Span::raw(close.to_string()));
            }
        }
        RowKind::Leaf { value } => {
            spans.push(Span::raw("  "));
            spans.extend(label);
            spans.push(Span::styled(value.clone(), leaf_style(value, c)));
        }
        RowKind::Close { close } => {
            spans.push(Span::raw(format!("  {close}")));
        }
    }
    Line::from(spans)
}

fn leaf_style(value: &str, c: &ThemeColors) -> Style {
    match value {
        "null" | "[]" | "{}" => Style::default().fg(c.muted),
        "true" | "false" => Style::default().fg(c.warning),
        v if v.starts_with('"') => Style::default().fg(c.success),
        _ => Style::default().fg(c.fg),
    }
}
