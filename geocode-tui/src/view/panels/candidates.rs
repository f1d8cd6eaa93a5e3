//! 候选结果列表

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use geocode_provider::{GeocodeError, ProviderId};

use crate::model::{App, FetchOutcome, FocusPanel, SearchResult};
use crate::view::components::panel_block;
use crate::view::theme::{Styles, colors};

/// 渲染候选结果面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FocusPanel::Candidates;
    let block = panel_block(&title(&app.search.outcome), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.search.outcome {
        FetchOutcome::Idle => render_message(
            frame,
            inner,
            Line::styled("Enter an address and press Enter to search", Styles::muted()),
        ),
        FetchOutcome::Loading { provider, address } => render_message(
            frame,
            inner,
            Line::styled(
                format!("Searching \"{address}\" on {provider}..."),
                Style::default().fg(colors().warning),
            ),
        ),
        FetchOutcome::Failed {
            provider,
            address,
            error,
        } => {
            let lines = failure_lines(*provider, address, error);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
        FetchOutcome::Loaded(result) if result.is_empty() => render_message(
            frame,
            inner,
            Line::styled("No results found for this address", Styles::muted()),
        ),
        FetchOutcome::Loaded(result) => render_list(result, focused, frame, inner),
    }
}

/// 面板标题，带上结果所对应的地址
fn title(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Loaded(result) if !result.is_empty() => format!(
            "Results ({}) · {}",
            result.candidates.len(),
            result.address
        ),
        FetchOutcome::Loaded(result) => format!("Results · {}", result.address),
        _ => "Results".to_string(),
    }
}

/// 失败时说明是哪次请求失败
fn failure_lines(provider: ProviderId, address: &str, error: &GeocodeError) -> Vec<Line<'static>> {
    vec![
        Line::styled(format!("{provider} could not geocode \"{address}\""), Styles::muted()),
        Line::styled(error.to_string(), Styles::error()),
    ]
}

fn render_message(frame: &mut Frame, area: Rect, line: Line<'_>) {
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// 渲染候选列表；只有一个结果时不需要选择
fn render_list(result: &SearchResult, focused: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = result
        .candidates
        .iter()
        .map(|candidate| {
            let mut spans = vec![
                Span::styled(format!("{:>2}. ", candidate.index + 1), Styles::muted()),
                Span::styled(candidate.label.clone(), Style::default().fg(c.fg)),
            ];
            if candidate.coordinate.is_none() {
                spans.push(Span::styled(" (no coordinates)", Styles::error()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = if focused || !result.needs_disambiguation() {
        Styles::selected()
    } else {
        Style::default().fg(c.highlight)
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol(if result.needs_disambiguation() { "▸ " } else { "" });

    let mut state = ListState::default().with_selected(Some(result.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocode_provider::{GeocodeOutcome, list_candidates};
    use serde_json::json;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn failure_names_provider_and_address() {
        let error = GeocodeError::Timeout {
            provider: "nominatim".to_string(),
            detail: "30s".to_string(),
        };
        let lines = failure_lines(ProviderId::Nominatim, "Rua A, 10", &error);
        assert_eq!(line_text(&lines[0]), "nominatim could not geocode \"Rua A, 10\"");
        assert_eq!(line_text(&lines[1]), "[nominatim] Request timeout: 30s");
    }

    #[test]
    fn title_shows_count_and_address() {
        assert_eq!(title(&FetchOutcome::Idle), "Results");

        let raw = json!([
            {"lat": "1", "lon": "2", "display_name": "A"},
            {"lat": "3", "lon": "4", "display_name": "B"}
        ]);
        let outcome = GeocodeOutcome {
            provider: ProviderId::Nominatim,
            candidates: list_candidates(&raw, ProviderId::Nominatim),
            raw,
        };
        let loaded = FetchOutcome::Loaded(SearchResult::from_outcome(outcome, "Lapa".to_string()));
        assert_eq!(title(&loaded), "Results (2) · Lapa");
    }
}
