//! 地图焦点：选中结果的坐标与 OpenStreetMap 链接

use geocode_provider::Coordinate;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::model::{App, SearchResult};
use crate::view::components::panel_block;
use crate::view::theme::{Styles, colors};

/// OpenStreetMap 上以该坐标为中心的链接
pub fn openstreetmap_url(coordinate: &Coordinate) -> String {
    let (lat, lng) = (coordinate.latitude, coordinate.longitude);
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=16/{lat}/{lng}")
}

/// 选中候选的标签、坐标与链接
fn focus_lines(result: Option<&SearchResult>) -> Vec<Line<'static>> {
    let Some(result) = result else {
        return vec![Line::styled("No location selected", Styles::muted())];
    };
    let Some(candidate) = result.selected_candidate() else {
        return vec![Line::styled("No location selected", Styles::muted())];
    };
    let label = Line::from(vec![
        Span::styled("Label  ", Styles::muted()),
        Span::raw(candidate.label.clone()),
    ]);
    match result.map_focus() {
        Some(Ok(coordinate)) => vec![
            label,
            Line::from(vec![
                Span::styled("Place  ", Styles::muted()),
                Span::styled(
                    coordinate.to_query_string(),
                    Style::default().fg(colors().success),
                ),
            ]),
            Line::from(vec![
                Span::styled("OSM    ", Styles::muted()),
                Span::raw(openstreetmap_url(&coordinate)),
            ]),
        ],
        Some(Err(err)) => vec![label, Line::styled(err.to_string(), Styles::error())],
        None => vec![label],
    }
}

/// 渲染地图焦点面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = panel_block("Map Focus", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = focus_lines(app.search.outcome.result());
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn result(raw: serde_json::Value) -> SearchResult {
        let outcome = geocode_provider::GeocodeOutcome {
            provider: geocode_provider::ProviderId::Nominatim,
            candidates: geocode_provider::list_candidates(
                &raw,
                geocode_provider::ProviderId::Nominatim,
            ),
            raw,
        };
        SearchResult::from_outcome(outcome, "Recife".to_string())
    }

    #[test]
    fn focus_follows_selected_candidate() {
        let mut r = result(serde_json::json!([
            {"lat": "-8.05", "lon": "-34.9", "display_name": "Recife"},
            {"lat": "-8.11", "lon": "-35.01", "display_name": "Jaboatão"}
        ]));
        r.select_next();
        assert_eq!(
            texts(&focus_lines(Some(&r))),
            vec![
                "Label  Jaboatão".to_string(),
                "Place  -8.11,-35.01".to_string(),
                format!("OSM    {}", openstreetmap_url(&Coordinate::new(-8.11, -35.01))),
            ]
        );
    }

    #[test]
    fn missing_coordinate_shows_error_under_label() {
        let r = result(serde_json::json!([{"display_name": "Nowhere"}]));
        let lines = texts(&focus_lines(Some(&r)));
        assert_eq!(lines[0], "Label  Nowhere");
        assert!(lines[1].starts_with("[nominatim] Malformed response at candidate 0"), "{lines:?}");
        assert_eq!(texts(&focus_lines(None)), vec!["No location selected".to_string()]);
    }

    #[test]
    fn osm_url_uses_lat_then_lng() {
        let url = openstreetmap_url(&Coordinate::new(-23.5, -46.6));
        assert_eq!(
            url,
            "https://www.openstreetmap.org/?mlat=-23.5&mlon=-46.6#map=16/-23.5/-46.6"
        );
    }
}
