//! 通用组件

pub mod modal;
pub mod statusbar;

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use super::theme::Styles;

/// 带标题的面板边框，聚焦时高亮
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 40, 10));
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
    }
}
