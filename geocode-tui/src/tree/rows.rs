//! 可见行生成

use serde_json::Value;

use super::path::NodePath;
use super::state::TreeState;

/// 展开指示符
pub const EXPANDED_MARK: &str = "▼";
/// 折叠指示符
pub const COLLAPSED_MARK: &str = "▶";

/// 行的类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// 标量或空容器
    Leaf { value: String },
    /// 可折叠节点的首行；折叠时带摘要，闭合括号也在同一行
    Header {
        expanded: bool,
        open: char,
        close: char,
        summary: Option<String>,
    },
    /// 展开节点的闭合括号行
    Close { close: char },
}

/// 一行可见内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// 所属节点（闭合行与首行指向同一节点）
    pub path: NodePath,
    /// 缩进层级
    pub depth: usize,
    /// 数组下标或对象键；根节点与闭合行为 `None`
    pub label: Option<String>,
    pub kind: RowKind,
}

impl TreeRow {
    /// 该行是否可以切换展开状态
    pub fn is_toggleable(&self) -> bool {
        matches!(self.kind, RowKind::Header { .. } | RowKind::Close { .. })
    }

    /// 纯文本形式（两个空格一级缩进）
    #[cfg(test)]
    pub fn text(&self) -> String {
        let indent = "  ".repeat(self.depth);
        let prefix = self
            .label
            .as_ref()
            .map(|l| format!("{l}: "))
            .unwrap_or_default();
        match &self.kind {
            RowKind::Leaf { value } => format!("{indent}  {prefix}{value}"),
            RowKind::Header {
                expanded: true,
                open,
                ..
            } => format!("{indent}{EXPANDED_MARK} {prefix}{open}"),
            RowKind::Header {
                expanded: false,
                open,
                close,
                summary,
            } => format!(
                "{indent}{COLLAPSED_MARK} {prefix}{open} {} {close}",
                summary.as_deref().unwrap_or_default()
            ),
            RowKind::Close { close } => format!("{indent}  {close}"),
        }
    }
}

/// 将 `value` 按 `state` 展开为可见行（深度优先）
pub fn render_rows(value: &Value, state: &TreeState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_node(&mut rows, value, NodePath::root(), None, state);
    rows
}

fn push_node(
    rows: &mut Vec<TreeRow>,
    value: &Value,
    path: NodePath,
    label: Option<String>,
    state: &TreeState,
) {
    let depth = path.depth();
    match value {
        Value::Array(items) if !items.is_empty() => {
            let expanded = state.is_expanded(&path);
            rows.push(header(&path, label, expanded, ('[', ']'), items.len(), array_summary));
            if expanded {
                for (i, child) in items.iter().enumerate() {
                    push_node(rows, child, path.child_index(i), Some(i.to_string()), state);
                }
                rows.push(close_row(path, depth, ']'));
            }
        }
        Value::Object(map) if !map.is_empty() => {
            let expanded = state.is_expanded(&path);
            rows.push(header(&path, label, expanded, ('{', '}'), map.len(), object_summary));
            if expanded {
                for (key, child) in map {
                    push_node(rows, child, path.child_key(key), Some(key.clone()), state);
                }
                rows.push(close_row(path, depth, '}'));
            }
        }
        leaf => rows.push(TreeRow {
            path,
            depth,
            label,
            kind: RowKind::Leaf {
                value: leaf_text(leaf),
            },
        }),
    }
}

fn header(
    path: &NodePath,
    label: Option<String>,
    expanded: bool,
    (open, close): (char, char),
    len: usize,
    summary: fn(usize) -> String,
) -> TreeRow {
    TreeRow {
        path: path.clone(),
        depth: path.depth(),
        label,
        kind: RowKind::Header {
            expanded,
            open,
            close,
            summary: (!expanded).then(|| summary(len)),
        },
    }
}

fn close_row(path: NodePath, depth: usize, close: char) -> TreeRow {
    TreeRow {
        path,
        depth,
        label: None,
        kind: RowKind::Close { close },
    }
}

fn array_summary(len: usize) -> String {
    format!("{len} items")
}

fn object_summary(len: usize) -> String {
    if len == 1 {
        "1 key".to_string()
    } else {
        format!("{len} keys")
    }
}

/// 叶子的显示文本；字符串按 JSON 规则加引号转义
fn leaf_text(value: &Value) -> String {
    match value {
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
