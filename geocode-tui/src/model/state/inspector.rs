//! JSON 树查看器状态

use serde_json::Value;

use crate::tree::{NodePath, TreeRow, TreeState, render_rows};

/// 翻页步长
pub const PAGE_STEP: usize = 10;

/// 查看器状态：节点展开状态 + 光标所在行
#[derive(Debug, Clone, Default)]
pub struct InspectorState {
    pub tree: TreeState,
    pub cursor: usize,
}

impl InspectorState {
    /// 新响应到达时重置（所有节点回到默认状态）
    pub fn reset(&mut self) {
        self.tree = TreeState::new();
        self.cursor = 0;
    }

    pub fn rows(&self, value: &Value) -> Vec<TreeRow> {
        render_rows(value, &self.tree)
    }

    /// 光标所在行对应的节点路径
    pub fn cursor_path(&self, value: &Value) -> Option<NodePath> {
        self.rows(value).into_iter().nth(self.cursor).map(|row| row.path)
    }

    pub fn move_up(&mut self, step: usize) {
        self.cursor = self.cursor.saturating_sub(step);
    }

    pub fn move_down(&mut self, step: usize, row_count: usize) {
        self.cursor = (self.cursor + step).min(row_count.saturating_sub(1));
    }

    pub fn move_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_bottom(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
    }

    /// 切换光标所在节点；在闭合行上操作时光标回到该节点首行
    pub fn toggle_at_cursor(&mut self, value: &Value) -> Option<bool> {
        let rows = self.rows(value);
        let row = rows.get(self.cursor).filter(|r| r.is_toggleable())?;
        let path = row.path.clone();
        let expanded = self.tree.toggle(&path);
        if let Some(header) = rows.iter().position(|r| r.path == path) {
            self.cursor = header;
        }
        Some(expanded)
    }

    pub fn expand_all(&mut self, value: &Value) {
        self.tree.expand_all(value);
        self.clamp(value);
    }

    pub fn collapse_all(&mut self, value: &Value) {
        self.tree.collapse_all(value);
        self.clamp(value);
    }

    fn clamp(&mut self, value: &Value) {
        let count = self.rows(value).len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }
}
