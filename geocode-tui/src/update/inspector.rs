//! 树查看器更新逻辑

use crate::message::InspectorMessage;
use crate::model::App;
use crate::model::state::PAGE_STEP;

/// 处理树查看器消息
pub fn update(app: &mut App, msg: InspectorMessage) {
    let Some(raw) = app.search.outcome.result().map(|r| &r.raw) else {
        return;
    };
    let inspector = &mut app.inspector;
    let row_count = inspector.rows(raw).len();

    match msg {
        InspectorMessage::Up => inspector.move_up(1),
        InspectorMessage::Down => inspector.move_down(1, row_count),
        InspectorMessage::PageUp => inspector.move_up(PAGE_STEP),
        InspectorMessage::PageDown => inspector.move_down(PAGE_STEP, row_count),
        InspectorMessage::Top => inspector.move_top(),
        InspectorMessage::Bottom => inspector.move_bottom(row_count),
        InspectorMessage::Toggle => {
            let path = inspector.cursor_path(raw);
            if let (Some(expanded), Some(path)) = (inspector.toggle_at_cursor(raw), path) {
                let verb = if expanded { "expanded" } else { "collapsed" };
                app.status_message = Some(format!("{path} {verb}"));
            }
        }
        InspectorMessage::ExpandAll => inspector.expand_all(raw),
        InspectorMessage::CollapseAll => inspector.collapse_all(raw),
    }
}
