//! 主布局

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::model::App;

use super::components;
use super::panels;
use super::theme::colors;

/// 搜索表单高度（含边框）
const SEARCH_FORM_HEIGHT: u16 = 8;
/// 地图焦点面板高度（含边框）
const MAP_FOCUS_HEIGHT: u16 = 6;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);

    // 左侧：表单 / 候选 / 地图焦点；右侧：树查看器
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(MAP_FOCUS_HEIGHT),
        ])
        .split(columns[0]);

    panels::search_form::render(app, frame, left[0]);
    panels::candidates::render(app, frame, left[1]);
    panels::map_focus::render(app, frame, left[2]);
    panels::inspector::render(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Geocode Inspector v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
